//! Custom cargo commands for agrofondos.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests, with and without `parallel`
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["levenshtein_matching", "search_queries", "score_calculation"];

/// Scoring constants that README.md documents, as (constant, README label).
const DOCUMENTED_WEIGHTS: &[(&str, &str)] = &[
    ("NAME_PREFIX_SCORE", "Name (at start)"),
    ("NAME_SCORE", "Name (elsewhere)"),
    ("INSTITUTION_SCORE", "Institution"),
    ("CATEGORY_SCORE", "Category"),
    ("REGION_SCORE", "Regions"),
    ("BENEFICIARY_SCORE", "Beneficiary types"),
    ("SUMMARY_SCORE", "Summary"),
    ("CLOSING_SOON_BONUS", "Closes within 30 days"),
    ("OPEN_BONUS", "Still open"),
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(env::args().nth(2).as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify         Run full verification suite (tests + clippy + documented weights)
  test           Run all Rust tests, with and without the parallel feature
  check          Quick check (cargo check + test + clippy)
  bench          Run benchmarks
  fuzz [SECS]    Run each fuzz target for SECS seconds (default 30, needs nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("agrofondos Verification Suite");
    println!("==========================================\n");

    println!("[1/3] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[2/3] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/3] Verifying documented scoring weights...");
    verify_weights()?;
    println!("✓ README weights match src/scoring/core.rs\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests in both feature configurations
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for a bounded time
fn fuzz(seconds: Option<&str>) -> Result<()> {
    let seconds: u64 = match seconds {
        Some(s) => s.parse().with_context(|| format!("invalid duration '{}'", s))?,
        None => 30,
    };
    let max_time = format!("-max_total_time={}", seconds);

    for target in FUZZ_TARGETS {
        println!("Fuzzing {} for {}s...", target, seconds);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }

    println!("\n✓ No fuzz failures");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Check that the weight table in README.md agrees with the constants.
fn verify_weights() -> Result<()> {
    let root = project_root()?;

    let core_rs = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;
    let readme = std::fs::read_to_string(root.join("README.md"))
        .context("Failed to read README.md")?;

    for (constant, label) in DOCUMENTED_WEIGHTS {
        let Some(code_value) = extract_const(&core_rs, constant) else {
            bail!("constant {} not found in src/scoring/core.rs", constant);
        };
        let Some(doc_value) = extract_table_value(&readme, label) else {
            bail!("row '{}' not found in README.md weight table", label);
        };
        if code_value != doc_value {
            bail!(
                "{} = {} in code but README says {} for '{}'",
                constant, code_value, doc_value, label
            );
        }
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<u32> {
    // Look for "pub const NAME: u32 = 40;"
    let prefix = format!("pub const {}:", name);
    content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(&prefix))
        .and_then(|line| line.split('=').nth(1))
        .and_then(|value| value.trim().trim_end_matches(';').trim().parse().ok())
}

fn extract_table_value(content: &str, label: &str) -> Option<u32> {
    // Look for "| Name (at start) | 40 |"
    content.lines().find_map(|line| {
        let cells: Vec<&str> = line.split('|').map(str::trim).collect();
        if cells.len() >= 3 && cells[1] == label {
            cells[2].parse().ok()
        } else {
            None
        }
    })
}
