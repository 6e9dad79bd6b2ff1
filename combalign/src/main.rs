use anyhow::Result;
use clap::{Parser, Subcommand};
use combalign::{inspect, merge};

/// Combines pairwise alignments against a shared reference into a one-to-many alignment.
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge the pairwise alignments of an input file and write the merged alignment.
    Merge(merge::Cli),
    /// Print the per-position records built from an input file.
    Inspect(inspect::Cli),
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Merge(cli) => merge::cli(cli),
        Command::Inspect(cli) => inspect::cli(cli),
    }
}
