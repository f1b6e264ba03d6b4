// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance scores.
//!
//! Every query word (longer than two characters) is expanded through the
//! synonym dictionary, and every expanded term is checked against every field.
//! Points accumulate: a term found in the name and the category scores both,
//! and a word whose synonyms hit the same field twice scores twice. There is
//! no de-duplication and no early exit.
//!
//! On top of that, a record that is still open gets a small date bonus,
//! computed once per record no matter how many words the query has.
//!
//! # Field weights
//!
//! | Field                 | Condition                 | Points |
//! |-----------------------|---------------------------|--------|
//! | name                  | contains term, at start   | 40     |
//! | name                  | contains term, elsewhere  | 30     |
//! | institution           | contains term             | 25     |
//! | category              | contains term             | 20     |
//! | regions (joined)      | contains term             | 10     |
//! | beneficiaries (joined)| contains term             | 10     |
//! | summary (joined)      | contains term             | 5      |
//!
//! # Date bonus
//!
//! | Days until closing | Points |
//! |--------------------|--------|
//! | 1..=30             | 5 + 3  |
//! | > 30               | 3      |
//! | <= 0 or unparseable| 0      |

use chrono::NaiveDate;
use tracing::trace;

use crate::synonyms::SynonymDictionary;
use crate::types::{FundingRecord, CLOSING_SOON_DAYS};
use crate::utils::{char_len, normalize};

// =============================================================================
// FIELD WEIGHTS
// =============================================================================

/// Term found at the very start of the name.
pub const NAME_PREFIX_SCORE: u32 = 40;

/// Term found in the name, not at the start.
pub const NAME_SCORE: u32 = 30;

/// Term found anywhere in the institution.
pub const INSTITUTION_SCORE: u32 = 25;

/// Term found anywhere in the category.
pub const CATEGORY_SCORE: u32 = 20;

/// Term found in the space-joined region list.
pub const REGION_SCORE: u32 = 10;

/// Term found in the space-joined beneficiary list.
pub const BENEFICIARY_SCORE: u32 = 10;

/// Term found in the concatenated summary.
pub const SUMMARY_SCORE: u32 = 5;

// =============================================================================
// DATE BONUS
// =============================================================================

/// Extra points when the record closes within [`CLOSING_SOON_DAYS`].
pub const CLOSING_SOON_BONUS: u32 = 5;

/// Points for any record that has not closed yet.
pub const OPEN_BONUS: u32 = 3;

/// Query words this short (in characters) are dropped before scoring.
pub const MAX_NOISE_WORD_LEN: usize = 2;

/// A record's text, normalized once per scoring call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringFields {
    pub name: String,
    pub institution: String,
    pub category: String,
    pub regions: String,
    pub beneficiaries: String,
    pub summary: String,
}

impl ScoringFields {
    pub fn from_record(record: &FundingRecord) -> Self {
        Self {
            name: normalize(&record.name),
            institution: normalize(&record.institution),
            category: normalize(&record.category),
            regions: normalize(&record.regions.join(" ")),
            beneficiaries: normalize(&record.beneficiary_types.join(" ")),
            summary: normalize(&record.summary_text()),
        }
    }
}

/// Points one normalized term earns against a record's fields.
pub fn term_score(term: &str, fields: &ScoringFields) -> u32 {
    let mut score = 0;

    if fields.name.contains(term) {
        score += if fields.name.starts_with(term) {
            NAME_PREFIX_SCORE
        } else {
            NAME_SCORE
        };
    }
    if fields.institution.contains(term) {
        score += INSTITUTION_SCORE;
    }
    if fields.category.contains(term) {
        score += CATEGORY_SCORE;
    }
    if fields.regions.contains(term) {
        score += REGION_SCORE;
    }
    if fields.beneficiaries.contains(term) {
        score += BENEFICIARY_SCORE;
    }
    if fields.summary.contains(term) {
        score += SUMMARY_SCORE;
    }

    score
}

/// Date bonus for a record relative to `today`.
///
/// Unparseable dates earn nothing and never fail.
pub fn recency_bonus(record: &FundingRecord, today: NaiveDate) -> u32 {
    let Some(diff_days) = record.days_until_close(today) else {
        return 0;
    };

    let mut bonus = 0;
    if diff_days > 0 && diff_days <= CLOSING_SOON_DAYS {
        bonus += CLOSING_SOON_BONUS;
    }
    if diff_days > 0 {
        bonus += OPEN_BONUS;
    }
    bonus
}

/// Query words that take part in scoring: normalized, split on whitespace,
/// with noise words of [`MAX_NOISE_WORD_LEN`] characters or fewer removed.
pub fn scoring_words(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .filter(|word| char_len(word) > MAX_NOISE_WORD_LEN)
        .map(str::to_string)
        .collect()
}

/// Relevance score of `record` for `query`.
///
/// An empty (or all-whitespace) query scores 0, with no date bonus: callers
/// treat that as "no ordering signal". A query made only of noise words still
/// picks up the date bonus.
pub fn score_record(
    query: &str,
    record: &FundingRecord,
    dictionary: &SynonymDictionary,
    today: NaiveDate,
) -> u32 {
    if query.trim().is_empty() {
        return 0;
    }

    let fields = ScoringFields::from_record(record);
    let mut score: u32 = 0;

    for word in scoring_words(query) {
        for term in dictionary.expand(&word) {
            score = score.saturating_add(term_score(&term, &fields));
        }
    }

    score = score.saturating_add(recency_bonus(record, today));
    trace!(id = record.id, score, "scored record");
    score
}
