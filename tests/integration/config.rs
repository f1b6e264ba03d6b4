//! Configuration files and custom synonym dictionaries.

use super::common::{dataset, ids, reference_date};
use agrofondos::config::DEFAULT_MAX_RESULTS;
use agrofondos::{Config, Error, SearchEngine, SynonymDictionary};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_config_file_drives_engine() {
    let dir = tempfile::tempdir().unwrap();
    let synonyms = dir.path().join("sinonimos.json");
    fs::write(&synonyms, r#"{"Exportación": ["ProChile"]}"#).unwrap();

    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "synonyms = {:?}\nmax_results = 3\nreplace_builtin_synonyms = true\n",
            synonyms.display().to_string()
        ),
    )
    .unwrap();

    let config = Config::load_from_path(&config_path).unwrap();
    assert_eq!(config.max_results(None), 3);

    let dictionary = config.dictionary(None).unwrap();
    assert_eq!(dictionary.len(), 1);
    assert_eq!(dictionary.expand("exportacion"), vec!["exportacion", "prochile"]);

    let engine = SearchEngine::new(dictionary).with_today(reference_date());
    assert_eq!(ids(&engine.search_and_rank("exportacion", dataset())), vec![12]);
}

#[test]
fn test_missing_config_file_is_none() {
    assert!(Config::load_from_path(&PathBuf::from("/nonexistent/agrofondos.toml")).is_none());
    assert_eq!(Config::default().max_results(None), DEFAULT_MAX_RESULTS);
}

#[test]
fn test_custom_synonym_merges_over_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extra.toml");
    fs::write(&path, "energia = [\"bombeo\"]\n").unwrap();

    let dictionary = Config::default().dictionary(Some(&path)).unwrap();
    // the custom entry replaces the built-in one for the same key
    assert_eq!(dictionary.expand("energía"), vec!["energia", "bombeo"]);
    assert!(dictionary.get("riego").is_some());
}

#[test]
fn test_unsupported_synonym_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sinonimos.yaml");
    fs::write(&path, "riego: [agua]").unwrap();

    let err = SynonymDictionary::load(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}

#[test]
fn test_invalid_synonym_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sinonimos.toml");
    fs::write(&path, "riego = \"agua\"").unwrap();

    let err = Config::default().dictionary(Some(&path)).unwrap_err();
    assert!(matches!(err, Error::Toml { .. }));
}
