// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use agrofondos::filters::{parse_date_arg, parse_status_arg, RecordFilter};
use agrofondos::{Config, JsonFileSource, RecordSource, SearchEngine};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load();

    match cli.command {
        Commands::Search {
            query,
            data,
            synonyms,
            category,
            region,
            institution,
            beneficiary,
            from,
            to,
            status,
            today,
            limit,
            json,
        } => {
            let today = resolve_today(today.as_deref())?;
            let dictionary = config
                .dictionary(synonyms.as_deref())
                .context("failed to load synonym dictionary")?;
            let engine = SearchEngine::new(dictionary).with_today(today);

            let path = config.data_path(data);
            let records = JsonFileSource::new(&path)
                .records()
                .with_context(|| format!("failed to load dataset '{}'", path.display()))?;

            let filter = RecordFilter {
                category,
                region,
                institution,
                beneficiary,
                closing_from: from.as_deref().map(parse_date_arg).transpose()?,
                closing_to: to.as_deref().map(parse_date_arg).transpose()?,
                status: status
                    .as_deref()
                    .map(|s| {
                        parse_status_arg(s).with_context(|| {
                            format!("unknown status '{}' (use open, closing-soon or closed)", s)
                        })
                    })
                    .transpose()?,
                today: Some(today),
            };

            let mut hits = engine.search_hits(&query, &records);
            hits.retain(|hit| filter.matches(hit.record));
            hits.truncate(config.max_results(limit));
            info!(query = %query, shown = hits.len(), "search complete");

            if json {
                println!("{}", display::render_hits_json(&hits)?);
            } else {
                print!("{}", display::render_hits(&query, &hits, records.len(), today));
            }
        }

        Commands::Expand { term, synonyms } => {
            let dictionary = config
                .dictionary(synonyms.as_deref())
                .context("failed to load synonym dictionary")?;
            let expanded = dictionary.expand(&term);
            print!("{}", display::render_expansion(&term, &expanded));
        }

        Commands::Inspect { data, today } => {
            let today = resolve_today(today.as_deref())?;
            let path = config.data_path(data);
            let records = JsonFileSource::new(&path)
                .records()
                .with_context(|| format!("failed to load dataset '{}'", path.display()))?;
            print!("{}", display::render_stats(&records, today));
        }
    }

    Ok(())
}

fn resolve_today(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(value) => Ok(parse_date_arg(value)?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
