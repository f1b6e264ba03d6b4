// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matched records get sorted.
//!
//! Score descending, then input position ascending. The position tiebreaker
//! makes the sort stable by construction, so equal scores keep the order the
//! data source gave them.

use std::cmp::Ordering;

/// A matched record, identified by its position in the input slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedHit {
    pub position: usize,
    pub score: u32,
}

/// Compare two hits for ranking.
///
/// Sort order:
/// 1. **Score** - higher wins
/// 2. **Position** - earlier in the input wins
pub fn compare_hits(a: &RankedHit, b: &RankedHit) -> Ordering {
    match b.score.cmp(&a.score) {
        Ordering::Equal => a.position.cmp(&b.position),
        ord => ord,
    }
}

/// Sort hits in place into ranking order.
pub fn rank_hits(hits: &mut [RankedHit]) {
    hits.sort_by(compare_hits);
}
