// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word similarity: when does a typo still count as the word?
//!
//! Two rules combined with OR, so the more permissive one wins:
//! - absolute: at most `threshold` edits (2 by default)
//! - relative: at most 20% of the longer word's length
//!
//! The absolute rule dominates for short and medium words; the relative one
//! only kicks in past 10 characters, where two edits would be too strict.
//!
//! Words under 4 characters never fuzzy-match. Spanish is full of short
//! function words ("de", "se", "su", "sí") that are one edit apart, and
//! letting them match each other floods results with noise.

use super::levenshtein_within;
use crate::utils::char_len;

/// Default absolute edit budget for [`is_similar`].
pub const DEFAULT_TYPO_THRESHOLD: usize = 2;

/// Words shorter than this (in characters) only match exactly.
pub const MIN_FUZZY_WORD_LEN: usize = 4;

/// Relative edit budget, expressed as `distance * DIVISOR <= max_len`
/// (i.e. `distance / max_len <= 0.2`) to stay in integer arithmetic.
const RELATIVE_BUDGET_DIVISOR: usize = 5;

/// Are `a` and `b` the same word, allowing for typos?
///
/// Uses [`DEFAULT_TYPO_THRESHOLD`]. Inputs are compared as given; callers
/// normalize first.
pub fn is_similar(a: &str, b: &str) -> bool {
    is_similar_with(a, b, DEFAULT_TYPO_THRESHOLD)
}

/// [`is_similar`] with an explicit absolute edit budget.
pub fn is_similar_with(a: &str, b: &str, threshold: usize) -> bool {
    let a_len = char_len(a);
    let b_len = char_len(b);

    if a_len < MIN_FUZZY_WORD_LEN || b_len < MIN_FUZZY_WORD_LEN {
        return a == b;
    }

    let relative = a_len.max(b_len) / RELATIVE_BUDGET_DIVISOR;
    levenshtein_within(a, b, threshold.max(relative))
}
