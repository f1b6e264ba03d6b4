//! Match correctness: which records a query selects.
//!
//! Controlled cases run against small inline documents with an explicit
//! dictionary so fuzzy matching cannot pull in surprises. Dataset cases only
//! assert membership that holds regardless of fuzzy near-misses.

use super::common::{dataset, engine, ranked_ids};
use agrofondos::search::utils::searchable_document;
use agrofondos::{smart_search, SynonymDictionary};

fn empty() -> SynonymDictionary {
    SynonymDictionary::new()
}

// ============================================================================
// PREDICATE
// ============================================================================

#[test]
fn test_every_word_must_match() {
    let doc = "Programa de Riego Intrapredial INDAP";
    assert!(smart_search("riego indap", doc, &empty()));
    assert!(!smart_search("riego forestal", doc, &empty()));
}

#[test]
fn test_word_order_is_irrelevant() {
    let doc = "Bonificación Forestal CONAF";
    assert!(smart_search("conaf forestal", doc, &empty()));
    assert!(smart_search("forestal conaf", doc, &empty()));
}

#[test]
fn test_accents_and_case_ignored_both_sides() {
    let doc = "Emergencia Agrícola por SEQUÍA";
    assert!(smart_search("sequia", doc, &empty()));
    assert!(smart_search("Agricola", doc, &empty()));
    assert!(smart_search("SEQUÍA", "sequia", &empty()));
}

#[test]
fn test_substring_inside_word() {
    assert!(smart_search("tecnifica", "tecnificación del riego", &empty()));
}

#[test]
fn test_synonym_bridges_vocabulary() {
    let dict = SynonymDictionary::from_entries([("riego", vec!["irrigacion"])]);
    assert!(smart_search("riego", "Proyectos de irrigación", &dict));
    assert!(!smart_search("riego", "Proyectos de irrigación", &empty()));
}

#[test]
fn test_synonyms_are_one_directional() {
    let dict = SynonymDictionary::from_entries([("riego", vec!["irrigacion"])]);
    assert!(!smart_search("irrigacion", "Concurso de Riego", &dict));
}

#[test]
fn test_typo_tolerance_on_long_words() {
    // one transposition is two edits, within the default budget
    assert!(smart_search("rigeo", "Concurso de Riego", &empty()));
    assert!(smart_search("fertilisacion", "Fertilización de praderas", &empty()));
}

#[test]
fn test_short_words_need_exact_match() {
    // "sag" is not a substring and is too short for fuzzy matching
    assert!(!smart_search("sag", "Servicio de sequía", &empty()));
    assert!(smart_search("sag", "Servicio Agrícola SAG", &empty()));
}

// ============================================================================
// DATASET
// ============================================================================

#[test]
fn test_riego_finds_irrigation_programs() {
    let ids = ranked_ids("riego");
    for id in [1, 2, 6, 7] {
        assert!(ids.contains(&id), "riego should find record {}", id);
    }
}

#[test]
fn test_two_words_narrow_results() {
    assert_eq!(ranked_ids("riego coquimbo"), vec![2, 7]);
}

#[test]
fn test_institution_acronym_expands() {
    // Record 1 is run by CNR; record 6 only mentions "Ley de Riego"
    let ids = ranked_ids("cnr");
    assert_eq!(ids.first(), Some(&1));
    assert!(ids.contains(&6), "cnr should find record 6 through \"ley de riego\"");
}

#[test]
fn test_typo_on_dataset() {
    let ids = ranked_ids("rigeo");
    for id in [1, 2, 6] {
        assert!(ids.contains(&id), "rigeo should find record {}", id);
    }
}

#[test]
fn test_accented_query_same_as_plain() {
    assert_eq!(ranked_ids("Sequía"), ranked_ids("sequia"));
    assert_eq!(ranked_ids("INNOVACIÓN"), ranked_ids("innovacion"));
}

#[test]
fn test_exportacion_only_matches_prochile() {
    assert_eq!(ranked_ids("exportacion"), vec![12]);
}

#[test]
fn test_unknown_term_matches_nothing() {
    assert!(ranked_ids("vitivinicola").is_empty());
}

#[test]
fn test_results_satisfy_predicate() {
    let engine = engine();
    for query in ["riego", "suelos", "pequeno productor", "bono sequia"] {
        for record in engine.search_and_rank(query, dataset()) {
            assert!(
                engine.matches(query, &searchable_document(&record)),
                "record {} returned for '{}' but does not match",
                record.id,
                query
            );
        }
    }
}
