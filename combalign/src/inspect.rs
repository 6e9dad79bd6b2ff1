use std::{io::stdout, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use lib_combalign::{input::InputDialect, output::write_positions, reference::ReferenceStore};
use log::{LevelFilter, warn};

use crate::{CliInputDialect, initialise_logging, load_input};

/// Prints the per-position records that the pairwise alignments are folded into.
#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    #[clap(long, short = 'i')]
    input: PathBuf,

    #[clap(long, short = 'd', default_value = "tm-align")]
    dialect: CliInputDialect,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    let dialect = InputDialect::from(cli.dialect);
    let input = load_input(&cli.input, dialect)?;
    let mut store = ReferenceStore::enter_reference(&input.reference)?
        .with_reference_gap_characters(dialect.reference_gap_characters().iter().copied());
    for record in &input.records {
        if let Err(error) = store.add_alignment(record) {
            warn!("Skipping pairwise alignment: {error}");
        }
    }

    write_positions(stdout().lock(), &store)?;
    Ok(())
}
