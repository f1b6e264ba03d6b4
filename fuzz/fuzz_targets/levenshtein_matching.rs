// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and word similarity.
//!
//! The bounded check must agree with the full distance, and similarity must be
//! reflexive and symmetric. If either lies, typo tolerance admits garbage or
//! drops real matches.

#![no_main]

use agrofondos::{is_similar, is_similar_with, levenshtein, levenshtein_within};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

/// Fuzz input for word matching
#[derive(Debug, Arbitrary)]
struct MatchInput {
    /// First word (UTF-8, capped to avoid timeout)
    a_bytes: Vec<u8>,
    /// Second word
    b_bytes: Vec<u8>,
    /// Edit budget
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths by characters; byte slicing could split a code point
    let a: String = String::from_utf8_lossy(&input.a_bytes).chars().take(40).collect();
    let b: String = String::from_utf8_lossy(&input.b_bytes).chars().take(40).collect();
    let max = (input.max % 8) as usize;

    let distance = levenshtein(&a, &b);

    // INVARIANT 1: Bounded check agrees with the full distance
    assert_eq!(
        levenshtein_within(&a, &b, max),
        distance <= max,
        "levenshtein_within disagrees for a='{}', b='{}', max={}",
        a, b, max
    );

    // INVARIANT 2: Distance is symmetric and bounded by the longer word
    assert_eq!(distance, levenshtein(&b, &a));
    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(distance >= la.abs_diff(lb));
    assert!(distance <= la.max(lb));

    // INVARIANT 3: Similarity is reflexive and symmetric
    assert!(is_similar(&a, &a), "word not similar to itself: '{}'", a);
    assert_eq!(is_similar(&a, &b), is_similar(&b, &a));

    // INVARIANT 4: Raising the threshold never rejects a match
    if is_similar_with(&a, &b, max) {
        assert!(is_similar_with(&a, &b, max + 1));
    }
});
