//! Custom cargo commands for the container sandbox crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run a fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Every file listed here must keep its invariant header.
const INVARIANT_MODULES: &[&str] = &[
    "contracts.rs",
    "dynamic.rs",
    "reversal_map.rs",
    "fixed/seq.rs",
    "fixed/sandbox.rs",
];

const FUZZ_TARGETS: &[&str] = &["sequence_ops", "map_ops"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify           Run full verification suite (markers + tests + clippy + no-serde build)
  test             Run all Rust tests
  check            Quick check (cargo test + clippy)
  bench            Run benchmarks
  fuzz [TARGET]    Run a fuzz target for 60s (default: sequence_ops)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Container Sandbox Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant headers...");
    check_invariant_markers()?;
    println!("✓ Invariant headers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Testing without default features...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Builds without serde\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
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

/// Run one fuzz target with a time limit. Needs cargo-fuzz and nightly.
fn fuzz(target: Option<&str>) -> Result<()> {
    let target = target.unwrap_or(FUZZ_TARGETS[0]);
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target {:?}, expected one of {:?}", target, FUZZ_TARGETS);
    }

    let fuzz_dir = project_root()?.join("fuzz");
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(&fuzz_dir)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }

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

fn check_invariant_markers() -> Result<()> {
    let src_dir = project_root()?.join("src");

    let mut missing = Vec::new();
    for module in INVARIANT_MODULES {
        let path = src_dir.join(module);
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if !source.contains("# INVARIANTS") {
            missing.push(*module);
        }
    }

    if !missing.is_empty() {
        bail!(
            "Invariant headers missing from {:?}. Someone may have removed safety comments!",
            missing
        );
    }

    Ok(())
}
