// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance search over Chilean agricultural funding calls ("convocatorias").
//!
//! Given a free-text query and a collection of funding records, decide which
//! records match (tolerant to synonyms, typos and accents) and order them by a
//! weighted relevance score.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  utils.rs   │────▶│ synonyms.rs  │────▶│  search/     │
//! │ (normalize) │     │  (expand)    │     │ (smart_search│
//! └─────────────┘     └──────────────┘     │  search_and_ │
//!        │                   │             │  rank)       │
//!        ▼                   ▼             └──────────────┘
//! ┌─────────────┐     ┌──────────────┐            │
//! │  fuzzy/     │     │  scoring/    │◀───────────┘
//! │ (is_similar)│     │ (score_record│
//! └─────────────┘     │  ranking)    │
//!                     └──────────────┘
//! ```
//!
//! Everything in the pipeline is a pure function of its inputs: the query,
//! the records, a [`SynonymDictionary`] and a reference date. No globals, no
//! caches, nothing to lock. [`SearchEngine`] bundles the dictionary and date
//! so callers can fix them once.
//!
//! Around the core sit the pieces a caller needs to use it: a [`RecordSource`]
//! to load data, [`RecordFilter`] for the exact-match filters applied on top
//! of search results, and [`Config`] for file-based settings.
//!
//! # Usage
//!
//! ```ignore
//! use agrofondos::{JsonFileSource, RecordSource, SearchEngine};
//!
//! let records = JsonFileSource::new("data/convocatorias.json").records()?;
//! let engine = SearchEngine::default();
//!
//! for record in engine.search_and_rank("riego tecnificado", &records) {
//!     println!("{}", record.name);
//! }
//! ```

// Module declarations
pub mod config;
mod engine;
pub mod error;
pub mod filters;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod source;
mod synonyms;
#[doc(hidden)]
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::Config;
pub use engine::SearchEngine;
pub use error::{Error, Result};
pub use filters::RecordFilter;
pub use fuzzy::{is_similar, is_similar_with, levenshtein, levenshtein_within};
pub use scoring::score_record;
pub use search::{search_and_rank, search_hits, smart_search, SearchHit};
pub use source::{JsonFileSource, RecordSource, StaticSource};
pub use synonyms::SynonymDictionary;
pub use types::{parse_iso_date, FundingRecord, RecordStatus, Summary, CLOSING_SOON_DAYS};
pub use utils::normalize;
