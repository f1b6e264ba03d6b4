// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the agrofondos CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `AGROFONDOS_THEME` first (for explicit control), then `COLORFGBG` (set by
//! some terminals), then defaults to dark. Respects `NO_COLOR` and non-TTY
//! detection for pipelines.
//!
//! Everything renders to a `String`; `main` decides where it goes.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::OnceLock;

use agrofondos::{FundingRecord, RecordStatus, SearchHit};
use chrono::NaiveDate;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("AGROFONDOS_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `text` to at most `max` visible characters, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Content line: │ content          │
fn row(out: &mut String, content: &str) {
    let border = themed(GRAY, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let _ = writeln!(out, "{}{}{}{}", border, content, " ".repeat(pad), border);
}

/// Section header: ┌─ LABEL ──────────┐
fn section_top(out: &mut String, label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let _ = writeln!(
        out,
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// Section footer: └──────────────────┘
fn section_bot(out: &mut String) {
    let _ = writeln!(
        out,
        "{}",
        themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH)))
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// RECORD RENDERING
// ═══════════════════════════════════════════════════════════════════════════

fn status_badge(status: RecordStatus) -> String {
    match status {
        RecordStatus::Open => themed(GREEN, &[], "open"),
        RecordStatus::ClosingSoon => themed(YELLOW, &[BOLD], "closing soon"),
        RecordStatus::Closed => themed(RED, &[], "closed"),
        RecordStatus::Unknown => themed(GRAY, &[DIM], "unknown"),
    }
}

/// Ranked results as boxed entries, one per record.
pub fn render_hits(query: &str, hits: &[SearchHit<'_>], total: usize, today: NaiveDate) -> String {
    let mut out = String::new();
    let label = if query.trim().is_empty() {
        format!("{} of {} records", hits.len(), total)
    } else {
        format!("\"{}\": {} of {} records", truncate(query, 40), hits.len(), total)
    };
    section_top(&mut out, &label);

    if hits.is_empty() {
        row(&mut out, &themed(GRAY, &[DIM], " no matching records"));
    }

    for (rank, hit) in hits.iter().enumerate() {
        let record = hit.record;
        let header = format!(
            " {:>2}. {}",
            rank + 1,
            themed(CYAN, &[BOLD], &truncate(&record.name, BOX_WIDTH - 16))
        );
        row(&mut out, &header);

        let meta = format!(
            "     {} · {} · closes {} · {} · score {}",
            truncate(&record.institution, 18),
            truncate(&record.category, 18),
            if record.closing_date.is_empty() { "?" } else { record.closing_date.as_str() },
            status_badge(record.status(today)),
            hit.score
        );
        row(&mut out, &meta);
    }

    section_bot(&mut out);
    out
}

/// Ranked results as a JSON array of `{record, score}`.
pub fn render_hits_json(hits: &[SearchHit<'_>]) -> serde_json::Result<String> {
    let values: Vec<serde_json::Value> = hits
        .iter()
        .map(|hit| {
            serde_json::json!({
                "score": hit.score,
                "record": hit.record,
            })
        })
        .collect();
    serde_json::to_string_pretty(&values)
}

/// A term and its expansion.
pub fn render_expansion(term: &str, expanded: &[String]) -> String {
    let mut out = String::new();
    section_top(&mut out, &format!("expand \"{}\"", truncate(term, 40)));
    for (i, form) in expanded.iter().enumerate() {
        let marker = if i == 0 { "=" } else { "~" };
        row(&mut out, &format!(" {} {}", themed(GRAY, &[], marker), form));
    }
    section_bot(&mut out);
    out
}

/// Dataset statistics: totals by category, institution and status.
pub fn render_stats(records: &[FundingRecord], today: NaiveDate) -> String {
    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_institution: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_status: BTreeMap<RecordStatus, usize> = BTreeMap::new();

    for record in records {
        *by_category.entry(record.category.as_str()).or_default() += 1;
        *by_institution.entry(record.institution.as_str()).or_default() += 1;
        *by_status.entry(record.status(today)).or_default() += 1;
    }

    let mut out = String::new();
    section_top(&mut out, &format!("{} records (as of {})", records.len(), today));

    row(&mut out, &themed(CYAN, &[BOLD], " Status"));
    for (status, count) in &by_status {
        row(&mut out, &format!("   {:<24} {:>5}", status.label(), count));
    }

    row(&mut out, &themed(CYAN, &[BOLD], " Category"));
    for (category, count) in &by_category {
        let name = if category.is_empty() { "(none)" } else { category };
        row(&mut out, &format!("   {:<24} {:>5}", truncate(name, 24), count));
    }

    row(&mut out, &themed(CYAN, &[BOLD], " Institution"));
    for (institution, count) in &by_institution {
        let name = if institution.is_empty() { "(none)" } else { institution };
        row(&mut out, &format!("   {:<24} {:>5}", truncate(name, 24), count));
    }

    section_bot(&mut out);
    out
}
