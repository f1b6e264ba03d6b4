// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be deterministic and ranking must be strictly ordered: score
//! descending, then input position. Saturating arithmetic means a hostile
//! query can't wrap a score around.

#![no_main]

use agrofondos::testing::{reference_date, sample_records};
use agrofondos::{FundingRecord, SearchEngine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &[u8]| {
    static RECORDS: std::sync::OnceLock<Vec<FundingRecord>> = std::sync::OnceLock::new();
    let records = RECORDS.get_or_init(sample_records);

    let query: String = String::from_utf8_lossy(query).chars().take(200).collect();
    let engine = SearchEngine::default().with_today(reference_date());

    // INVARIANT 1: Scores are deterministic
    for record in records {
        assert_eq!(engine.score(&query, record), engine.score(&query, record));
    }

    // INVARIANT 2: Blank query scores zero
    if query.trim().is_empty() {
        assert!(records.iter().all(|r| engine.score(&query, r) == 0));
    }

    // INVARIANT 3: Ranking is score descending, ties by input position
    let position = |id: u64| records.iter().position(|r| r.id == id);
    let hits = engine.search_hits(&query, records);
    for pair in hits.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score
                || (a.score == b.score && position(a.record.id) < position(b.record.id)),
            "hits out of order for '{}': {:?} then {:?}",
            query,
            (a.record.id, a.score),
            (b.record.id, b.score)
        );
    }
});
