// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filter-and-rank: the pipeline the presentation layer calls.
//!
//! Map every record to an optional hit (match predicate, then score), collect
//! in input order, sort. The map step is embarrassingly parallel and runs on
//! rayon when the `parallel` feature is on; the sort is the same either way,
//! so output does not depend on the feature.

use chrono::NaiveDate;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::matching::smart_search;
use super::utils::searchable_document;
use crate::scoring::ranking::{rank_hits, RankedHit};
use crate::scoring::score_record;
use crate::synonyms::SynonymDictionary;
use crate::types::FundingRecord;

/// A ranked record together with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub record: &'a FundingRecord,
    pub score: u32,
}

/// Matching records in ranking order, with their scores.
///
/// An empty query returns every record in input order, each with score 0.
pub fn search_hits<'a>(
    query: &str,
    records: &'a [FundingRecord],
    dictionary: &SynonymDictionary,
    today: NaiveDate,
) -> Vec<SearchHit<'a>> {
    if query.trim().is_empty() {
        return records
            .iter()
            .map(|record| SearchHit { record, score: 0 })
            .collect();
    }

    let evaluate = |(position, record): (usize, &FundingRecord)| -> Option<RankedHit> {
        if !smart_search(query, &searchable_document(record), dictionary) {
            return None;
        }
        Some(RankedHit {
            position,
            score: score_record(query, record, dictionary, today),
        })
    };

    let mut hits: Vec<RankedHit> = {
        #[cfg(feature = "parallel")]
        {
            records.par_iter().enumerate().filter_map(evaluate).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            records.iter().enumerate().filter_map(evaluate).collect()
        }
    };

    rank_hits(&mut hits);
    debug!(query, matched = hits.len(), total = records.len(), "ranked records");

    hits.into_iter()
        .map(|hit| SearchHit {
            record: &records[hit.position],
            score: hit.score,
        })
        .collect()
}

/// Matching records in ranking order.
///
/// An empty or whitespace-only query is a pass-through: the input, unchanged
/// and unsorted. Otherwise only records that match every query word survive,
/// sorted by score descending; equal scores keep their input order. The input
/// is never modified.
pub fn search_and_rank(
    query: &str,
    records: &[FundingRecord],
    dictionary: &SynonymDictionary,
    today: NaiveDate,
) -> Vec<FundingRecord> {
    search_hits(query, records, dictionary, today)
        .into_iter()
        .map(|hit| hit.record.clone())
        .collect()
}
