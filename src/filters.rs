// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact-match filters applied on top of search results.
//!
//! These are independent of relevance: the caller composes them with the
//! ranked output (or with the raw collection). The engine never calls them.
//! All text comparisons are normalized equality, not substring or fuzzy.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::types::{parse_iso_date, FundingRecord, RecordStatus};
use crate::utils::normalize;

/// Region labels that stand for "every region".
pub const ALL_REGIONS_SENTINELS: &[&str] = &["todas", "todas las regiones", "nacional"];

/// Conjunction of optional criteria. The default filter accepts everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub category: Option<String>,
    pub region: Option<String>,
    pub institution: Option<String>,
    pub beneficiary: Option<String>,
    pub closing_from: Option<NaiveDate>,
    pub closing_to: Option<NaiveDate>,
    pub status: Option<RecordStatus>,
    /// Reference date for `status`.
    pub today: Option<NaiveDate>,
}

impl RecordFilter {
    /// True when no criterion is set. `today` alone is not a criterion.
    pub fn is_empty(&self) -> bool {
        Self {
            today: None,
            ..self.clone()
        } == Self::default()
    }

    /// Does `record` pass every criterion that is set?
    pub fn matches(&self, record: &FundingRecord) -> bool {
        if let Some(category) = &self.category {
            if normalize(&record.category) != normalize(category) {
                return false;
            }
        }

        if let Some(institution) = &self.institution {
            if normalize(&record.institution) != normalize(institution) {
                return false;
            }
        }

        if let Some(region) = &self.region {
            let wanted = normalize(region);
            let covered = record.regions.iter().any(|r| {
                let r = normalize(r);
                r == wanted || ALL_REGIONS_SENTINELS.contains(&r.as_str())
            });
            if !covered {
                return false;
            }
        }

        if let Some(beneficiary) = &self.beneficiary {
            let wanted = normalize(beneficiary);
            if !record
                .beneficiary_types
                .iter()
                .any(|b| normalize(b) == wanted)
            {
                return false;
            }
        }

        if self.closing_from.is_some() || self.closing_to.is_some() {
            let Some(closing) = record.closing_date() else {
                return false;
            };
            if self.closing_from.is_some_and(|from| closing < from) {
                return false;
            }
            if self.closing_to.is_some_and(|to| closing > to) {
                return false;
            }
        }

        if let Some(status) = self.status {
            let today = self
                .today
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            if record.status(today) != status {
                return false;
            }
        }

        true
    }

    /// Keep matching records, preserving order.
    pub fn apply(&self, records: Vec<FundingRecord>) -> Vec<FundingRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Parse a user-supplied `YYYY-MM-DD` date.
pub fn parse_date_arg(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| parse_iso_date(value))
        .ok_or_else(|| Error::InvalidDate(value.to_string()))
}

/// Parse a status name as used on the command line.
pub fn parse_status_arg(value: &str) -> Option<RecordStatus> {
    match normalize(value).replace('_', "-").as_str() {
        "open" | "abierta" => Some(RecordStatus::Open),
        "closing-soon" | "soon" | "cierra-pronto" => Some(RecordStatus::ClosingSoon),
        "closed" | "cerrada" => Some(RecordStatus::Closed),
        "unknown" => Some(RecordStatus::Unknown),
        _ => None,
    }
}
