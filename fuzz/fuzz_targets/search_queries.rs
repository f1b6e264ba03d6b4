// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search queries.
//!
//! Arbitrary bytes as a query against the bundled dataset: no panics, every
//! result comes from the input and satisfies the match predicate, and an
//! empty query passes everything through.

#![no_main]

use agrofondos::search::utils::searchable_document;
use agrofondos::testing::reference_date;
use agrofondos::{FundingRecord, JsonFileSource, RecordSource, SearchEngine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &[u8]| {
    // Load dataset once per process
    static RECORDS: std::sync::OnceLock<Vec<FundingRecord>> = std::sync::OnceLock::new();
    let records = RECORDS.get_or_init(|| {
        // fuzz runs from either the crate root or fuzz/
        ["data/convocatorias.json", "../data/convocatorias.json"]
            .iter()
            .find_map(|p| JsonFileSource::new(p).records().ok())
            .expect("Failed to read dataset from any path")
    });

    let query: String = String::from_utf8_lossy(query).chars().take(200).collect();
    let engine = SearchEngine::default().with_today(reference_date());

    let ranked = engine.search_and_rank(&query, records);

    // INVARIANT 1: Output never grows
    assert!(ranked.len() <= records.len());

    // INVARIANT 2: Blank query is a pass-through
    if query.trim().is_empty() {
        assert_eq!(&ranked, records);
        return;
    }

    // INVARIANT 3: Every result matches
    for record in &ranked {
        assert!(
            engine.matches(&query, &searchable_document(record)),
            "record {} returned for '{}' without matching",
            record.id,
            query
        );
    }
});
