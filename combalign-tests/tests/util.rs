use std::{env, path::PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;
use combalign::{inspect, merge};

pub fn run_in_repo_root(args: &str) -> Result<()> {
    // Simulate a call from the repo root, which is the parent of this crate.
    env::set_current_dir(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .ok_or(anyhow!("No parent directory"))?,
    )?;

    if args.starts_with("merge ") {
        let args = merge::Cli::parse_from(args.split_whitespace());
        merge::cli(args)?;
    } else if args.starts_with("inspect ") {
        let args = inspect::Cli::parse_from(args.split_whitespace());
        inspect::cli(args)?;
    } else {
        return Err(anyhow!("Unknown subcommand: {args}"));
    }

    Ok(())
}

/// A path in the temporary directory that is unique to the given test.
pub fn output_path(test_name: &str) -> PathBuf {
    env::temp_dir().join(format!("combalign-tests-{}-{test_name}", std::process::id()))
}
