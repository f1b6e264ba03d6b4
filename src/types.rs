// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for funding records.
//!
//! Records are read-only to the engine. Optional collections default to empty
//! at the serde boundary so nothing downstream has to reason about `null`.
//! The only `Option` left is `summary`, and it is read through accessors that
//! return empty text when absent.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Days before closing at which an open record counts as closing soon.
pub const CLOSING_SOON_DAYS: i64 = 30;

/// One grant, subsidy or credit opportunity ("convocatoria").
///
/// Field names deserialize from both the English camelCase shape and the
/// Spanish keys used by the published dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingRecord {
    /// Unique, stable identifier within a collection.
    pub id: u64,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default", alias = "institucion")]
    pub institution: String,
    #[serde(default, deserialize_with = "null_default", alias = "categoria")]
    pub category: String,
    /// ISO calendar date (`YYYY-MM-DD`). Kept raw: parsing happens where it
    /// is used, and a malformed value only disables date-based logic.
    #[serde(default, deserialize_with = "null_default", alias = "fechaCierre")]
    pub closing_date: String,
    #[serde(default, deserialize_with = "null_default", alias = "regiones")]
    pub regions: Vec<String>,
    #[serde(default, deserialize_with = "null_default", alias = "beneficiarios")]
    pub beneficiary_types: Vec<String>,
    #[serde(default, alias = "resumen", skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

/// Structured free-text summary attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default, deserialize_with = "null_default", alias = "cofinanciamiento")]
    pub co_financing: String,
    #[serde(default, deserialize_with = "null_default", alias = "plazoEjecucion")]
    pub execution_timeframe: String,
    #[serde(default, deserialize_with = "null_default", alias = "requisitosClave")]
    pub key_requirements: Vec<String>,
    #[serde(default, deserialize_with = "null_default", alias = "observaciones")]
    pub remarks: String,
}

impl Summary {
    /// All sub-fields joined with single spaces, in declaration order.
    pub fn text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3 + self.key_requirements.len());
        parts.push(&self.co_financing);
        parts.push(&self.execution_timeframe);
        parts.extend(self.key_requirements.iter().map(String::as_str));
        parts.push(&self.remarks);
        parts.join(" ")
    }
}

/// Treat an explicit `null` like a missing key.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Where a record stands relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordStatus {
    /// Closes in more than [`CLOSING_SOON_DAYS`] days.
    Open,
    /// Closes within [`CLOSING_SOON_DAYS`] days.
    ClosingSoon,
    /// Closing date is today or earlier.
    Closed,
    /// Closing date could not be parsed.
    Unknown,
}

impl RecordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Open => "open",
            RecordStatus::ClosingSoon => "closing-soon",
            RecordStatus::Closed => "closed",
            RecordStatus::Unknown => "unknown",
        }
    }
}

impl FundingRecord {
    /// Summary text, or empty when the record has none.
    pub fn summary_text(&self) -> String {
        self.summary.as_ref().map(Summary::text).unwrap_or_default()
    }

    /// Parsed closing date.
    ///
    /// Accepts a bare `YYYY-MM-DD` or one followed by a time component
    /// (`2025-03-31T23:59:00`), which is ignored.
    pub fn closing_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.closing_date)
    }

    /// Whole days from `today` until closing. Negative once closed.
    pub fn days_until_close(&self, today: NaiveDate) -> Option<i64> {
        self.closing_date()
            .map(|closing| (closing - today).num_days())
    }

    /// Classify the record against `today`.
    pub fn status(&self, today: NaiveDate) -> RecordStatus {
        match self.days_until_close(today) {
            None => RecordStatus::Unknown,
            Some(days) if days <= 0 => RecordStatus::Closed,
            Some(days) if days <= CLOSING_SOON_DAYS => RecordStatus::ClosingSoon,
            Some(_) => RecordStatus::Open,
        }
    }
}

/// Parse the date part of an ISO-8601 string.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let (date_part, rest) = match value.char_indices().nth(10) {
        Some((split, _)) => value.split_at(split),
        None => (value, ""),
    };
    if !rest.is_empty() && !rest.starts_with(['T', ' ']) {
        return None;
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
