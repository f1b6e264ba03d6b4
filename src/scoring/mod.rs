// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matched records get their numbers.
//!
//! Scores are additive integers with no upper bound and no meaning beyond
//! ordering. Name hits dominate, then institution, category, the list fields
//! and finally the summary; an open closing date adds a small nudge.

mod core;
pub mod ranking;

pub use self::core::*;
