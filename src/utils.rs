// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for comparison: lowercase, strip diacritics, trim.
///
/// Every text comparison in the crate goes through this, so matching is both
/// case- and accent-insensitive:
/// - "Innovación" → "innovacion"
/// - "Ñuble" → "nuble"
/// - "  Pingüino " → "pinguino"
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. NFD normalize (decompose characters into base + combining marks)
/// 3. Filter out combining marks
/// 4. Trim leading/trailing whitespace
///
/// Lowercasing happens first because some uppercase letters lowercase into a
/// base letter plus a combining mark ("İ" → "i̇"); stripping afterwards keeps
/// the function idempotent. Inner whitespace is left untouched.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Check if a character is a combining mark (diacritic).
///
/// Examples: ́ (acute), ̃ (tilde), ̈ (diaeresis)
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Length in characters, not bytes. Word-length thresholds are defined on
/// what a reader would count.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
