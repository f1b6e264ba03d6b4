// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: the match predicate and the filter-and-rank pipeline.
//!
//! Matching is tolerant (synonyms, typos, accents) and decides membership.
//! Scoring lives in [`crate::scoring`] and only decides order.

mod matching;
mod rank;
pub mod utils;

pub use matching::*;
pub use rank::*;
