//! Edge cases: empty inputs, missing fields, odd queries.

use super::common::{dataset, engine, ids, make_record, ranked_ids};
use agrofondos::{FundingRecord, SynonymDictionary};

// ============================================================================
// EMPTY INPUTS
// ============================================================================

#[test]
fn test_empty_query_returns_input_unchanged() {
    let all: Vec<u64> = (1..=12).collect();
    assert_eq!(ranked_ids(""), all);
    assert_eq!(ranked_ids("   \t "), all);
}

#[test]
fn test_empty_query_hits_score_zero() {
    let hits = engine().search_hits("", dataset());
    assert_eq!(hits.len(), dataset().len());
    assert!(hits.iter().all(|h| h.score == 0));
}

#[test]
fn test_empty_collection() {
    let records: Vec<FundingRecord> = vec![];
    assert!(engine().search_and_rank("riego", &records).is_empty());
    assert!(engine().search_and_rank("", &records).is_empty());
}

#[test]
fn test_record_without_optional_fields() {
    // ProChile call: no regions, no summary, unparseable closing date
    let record = dataset().iter().find(|r| r.id == 12).unwrap();
    assert!(record.summary.is_none());
    assert!(record.regions.is_empty());
    // name 30 + institution "prochile" 25, no date bonus
    assert_eq!(engine().score("exportacion", record), 55);
}

#[test]
fn test_bare_record_matches_only_its_name() {
    let records = vec![make_record(1, "Fondo Apícola")];
    let engine = agrofondos::SearchEngine::new(SynonymDictionary::new());
    assert_eq!(ids(&engine.search_and_rank("apicola", &records)), vec![1]);
    assert!(engine.search_and_rank("forestal", &records).is_empty());
}

// ============================================================================
// ODD QUERIES
// ============================================================================

#[test]
fn test_symbols_and_emoji_do_not_panic() {
    for query in ["🌱", "riego 🌱", "¿riego?", "90%", "SIRSD-S:", "\u{0301}", "ñ"] {
        let _ = engine().search_and_rank(query, dataset());
    }
}

#[test]
fn test_emoji_word_must_still_match() {
    // AND semantics: an unmatched word rejects every record
    assert!(ranked_ids("riego 🌱").is_empty());
}

#[test]
fn test_punctuation_kept_in_document() {
    // the name is "SIRSD-S: ..." so the hyphenated token matches literally
    let found = ranked_ids("sirsd-s");
    assert!(found.contains(&3));
    assert!(found.contains(&4));
}

#[test]
fn test_very_long_query() {
    let query = "riego ".repeat(200);
    let ranked = ranked_ids(&query);
    assert_eq!(ranked.first(), Some(&2));
}

#[test]
fn test_combining_mark_query_is_empty_after_normalize() {
    // a lone combining accent normalizes to nothing and matches as a substring
    assert_eq!(ranked_ids("\u{0301}").len(), dataset().len());
}
