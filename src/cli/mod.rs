// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the agrofondos command-line interface.
//!
//! Three subcommands: `search` to query a dataset (with the same exact-match
//! filters the website offers), `expand` to see what a term turns into before
//! matching, and `inspect` to summarize a dataset.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "agrofondos",
    about = "Search and rank Chilean agricultural funding calls",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search records and print them ranked by relevance
    Search {
        /// Free-text query (empty lists everything in dataset order)
        #[arg(default_value = "")]
        query: String,

        /// Path to the JSON dataset
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Synonym dictionary file (.json or .toml) merged over the built-in one
        #[arg(long)]
        synonyms: Option<PathBuf>,

        /// Keep only this category
        #[arg(long)]
        category: Option<String>,

        /// Keep only records that apply to this region
        #[arg(long)]
        region: Option<String>,

        /// Keep only this institution
        #[arg(long)]
        institution: Option<String>,

        /// Keep only records open to this beneficiary type
        #[arg(long)]
        beneficiary: Option<String>,

        /// Earliest closing date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,

        /// Latest closing date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Keep only records in this state: open, closing-soon, closed
        #[arg(long)]
        status: Option<String>,

        /// Reference date for closing-date bonus and status (default: today)
        #[arg(long)]
        today: Option<String>,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the synonym expansion of a term
    Expand {
        /// Term to expand
        term: String,

        /// Synonym dictionary file (.json or .toml) merged over the built-in one
        #[arg(long)]
        synonyms: Option<PathBuf>,
    },

    /// Print dataset statistics
    Inspect {
        /// Path to the JSON dataset
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Reference date for status counts (default: today)
        #[arg(long)]
        today: Option<String>,
    },
}
