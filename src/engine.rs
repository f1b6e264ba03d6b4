// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `SearchEngine`: the dictionary and the reference date, bundled.
//!
//! The free functions in [`crate::search`] and [`crate::scoring`] take both as
//! arguments. Most callers want to fix them once and then issue queries, so
//! the engine holds them and forwards. It carries no other state; cloning it
//! or sharing it across threads is free of surprises.

use chrono::NaiveDate;
use tracing::debug;

use crate::scoring::score_record;
use crate::search::{search_and_rank, search_hits, smart_search, SearchHit};
use crate::synonyms::SynonymDictionary;
use crate::types::FundingRecord;

#[derive(Debug, Clone)]
pub struct SearchEngine {
    dictionary: SynonymDictionary,
    today: NaiveDate,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SynonymDictionary::builtin())
    }
}

impl SearchEngine {
    /// Engine over `dictionary`, with today's local date as reference.
    pub fn new(dictionary: SynonymDictionary) -> Self {
        debug!(entries = dictionary.len(), "search engine ready");
        Self {
            dictionary,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Pin the reference date used for the closing-date bonus.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn dictionary(&self) -> &SynonymDictionary {
        &self.dictionary
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Normalized term plus its synonyms.
    pub fn expand(&self, term: &str) -> Vec<String> {
        self.dictionary.expand(term)
    }

    /// Does `document` support every word of `query`?
    pub fn matches(&self, query: &str, document: &str) -> bool {
        smart_search(query, document, &self.dictionary)
    }

    /// Relevance of `record` for `query`.
    pub fn score(&self, query: &str, record: &FundingRecord) -> u32 {
        score_record(query, record, &self.dictionary, self.today)
    }

    /// Matching records, best first. Empty query returns the input as-is.
    pub fn search_and_rank(&self, query: &str, records: &[FundingRecord]) -> Vec<FundingRecord> {
        search_and_rank(query, records, &self.dictionary, self.today)
    }

    /// Like [`Self::search_and_rank`], borrowing records and keeping scores.
    pub fn search_hits<'a>(&self, query: &str, records: &'a [FundingRecord]) -> Vec<SearchHit<'a>> {
        search_hits(query, records, &self.dictionary, self.today)
    }
}
