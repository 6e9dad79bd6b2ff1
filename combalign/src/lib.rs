//! Command line interface of combalign.
//!
//! The subcommands are exposed as modules, so that they can be driven from tests.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Result, anyhow};
use clap::ValueEnum;
use lib_combalign::input::{InputDialect, ParsedInput, read_input};
use log::{LevelFilter, debug, info};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

pub mod inspect;
pub mod merge;

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum CliInputDialect {
    /// Name, reference, correspondence and match line per alignment.
    TmAlign,
    /// Fragments tagged with NAME, REF, CORR and MTCH in fixed columns.
    FixedColumn,
}

impl From<CliInputDialect> for InputDialect {
    fn from(dialect: CliInputDialect) -> Self {
        match dialect {
            CliInputDialect::TmAlign => Self::TmAlign,
            CliInputDialect::FixedColumn => Self::FixedColumn,
        }
    }
}

fn initialise_logging(log_level: LevelFilter) {
    if TermLogger::init(
        log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        debug!("Logger was initialised already");
    }
}

fn load_input(path: &Path, dialect: InputDialect) -> Result<ParsedInput> {
    info!("Loading {dialect:?} input file {path:?}");
    let file = File::open(path).map_err(|error| anyhow!("Error opening input file: {error}"))?;
    Ok(read_input(BufReader::new(file), dialect)?)
}
