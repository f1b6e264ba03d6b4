//! Loading records from JSON sources.

use super::common::{dataset, dataset_path, reference_date, sample_records};
use agrofondos::{Error, JsonFileSource, RecordSource, RecordStatus, StaticSource};
use std::collections::HashSet;
use std::fs;

#[test]
fn test_bundled_dataset_loads() {
    let records = dataset();
    assert_eq!(records.len(), 12);

    let ids: HashSet<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), records.len(), "ids must be unique");
}

#[test]
fn test_spanish_keys_populate_fields() {
    let record = &dataset()[0];
    assert_eq!(record.name, "CNR: Concurso Nacional de Riego");
    assert_eq!(record.institution, "CNR");
    assert_eq!(record.category, "Riego");
    assert_eq!(record.closing_date, "2025-02-04");
    assert_eq!(record.regions, vec!["Todas"]);
    assert_eq!(record.beneficiary_types.len(), 3);

    let summary = record.summary.as_ref().unwrap();
    assert!(summary.co_financing.contains("90%"));
    assert_eq!(summary.key_requirements.len(), 2);
}

#[test]
fn test_partial_summary_defaults() {
    // record 11 has no "observaciones"
    let record = dataset().iter().find(|r| r.id == 11).unwrap();
    assert_eq!(record.summary.as_ref().unwrap().remarks, "");
}

#[test]
fn test_dataset_statuses() {
    let today = reference_date();
    let status = |id: u64| dataset().iter().find(|r| r.id == id).unwrap().status(today);
    assert_eq!(status(1), RecordStatus::ClosingSoon);
    assert_eq!(status(7), RecordStatus::ClosingSoon);
    assert_eq!(status(2), RecordStatus::Open);
    assert_eq!(status(4), RecordStatus::Closed);
    assert_eq!(status(12), RecordStatus::Unknown);
}

#[test]
fn test_english_keys_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    let records = sample_records();
    fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

    let loaded = JsonFileSource::new(&path).records().unwrap();
    assert_eq!(loaded, records);
    assert!(fs::read_to_string(&path).unwrap().contains("\"closingDate\""));
}

#[test]
fn test_malformed_dataset_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roto.json");
    fs::write(&path, "[{\"id\": \"uno\"}]").unwrap();

    let err = JsonFileSource::new(&path).records().unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
    assert!(err.to_string().contains("roto.json"));
}

#[test]
fn test_sources_are_interchangeable() {
    fn count(source: &dyn RecordSource) -> usize {
        source.records().map(|r| r.len()).unwrap_or(0)
    }
    assert_eq!(count(&JsonFileSource::new(dataset_path())), 12);
    assert_eq!(count(&StaticSource::new(sample_records())), 5);
}
