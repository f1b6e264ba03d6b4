// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules.
//!
//! Query splitting and the flattened per-record document the match predicate
//! runs against.

use crate::types::FundingRecord;

/// Split a raw query into whitespace-separated words.
///
/// Words are not normalized here; synonym expansion normalizes each one.
pub fn query_words(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

/// Flatten a record into one searchable string.
///
/// Name, institution, category, every region, every beneficiary type and
/// every summary sub-field, joined with single spaces. Empty parts are kept
/// as-is; they only add whitespace, which matching ignores.
pub fn searchable_document(record: &FundingRecord) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(
        3 + record.regions.len() + record.beneficiary_types.len() + 4,
    );
    parts.push(&record.name);
    parts.push(&record.institution);
    parts.push(&record.category);
    parts.extend(record.regions.iter().map(String::as_str));
    parts.extend(record.beneficiary_types.iter().map(String::as_str));

    let summary = record.summary_text();
    if record.summary.is_some() {
        parts.push(&summary);
    }

    parts.join(" ")
}
