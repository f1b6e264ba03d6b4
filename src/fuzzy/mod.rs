// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two layers here: raw Levenshtein distance (bounded and unbounded), and the
//! word-similarity rule built on top of it that the match predicate uses.

mod levenshtein;
mod similarity;

pub use levenshtein::*;
pub use similarity::*;
