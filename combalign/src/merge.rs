use std::{
    fs::File,
    io::{BufWriter, Write, stdout},
    path::PathBuf,
};

use anyhow::{Result, bail, ensure};
use clap::{Parser, ValueEnum};
use lib_combalign::{
    input::InputDialect,
    output::{statistics::AlignmentStatistics, write_fasta, write_plain},
    reference::ReferenceStore,
    synthesize::DisplayAlignment,
};
use log::{LevelFilter, info, warn};

use crate::{CliInputDialect, initialise_logging, load_input};

pub const MAX_WIDTH: usize = 250;

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// Path to a file holding the reference followed by its pairwise alignments.
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// Path to the output file. If not given, the merged alignment is written to stdout.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// The number of columns per segment.
    ///
    /// If zero, then the merged alignment is not split into segments.
    #[clap(long, short = 'w', default_value = "80")]
    width: usize,

    #[clap(long, short = 'd', default_value = "tm-align")]
    dialect: CliInputDialect,

    #[clap(long, short = 'f', default_value = "plain")]
    format: OutputFormat,

    /// Write summary statistics of the merged alignment to this toml file.
    #[clap(long, short = 's')]
    statistics: Option<PathBuf>,

    /// Abort on the first rejected pairwise alignment instead of skipping it.
    #[clap(long)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    /// Labelled segments with a preamble.
    Plain,
    /// One fasta record per row.
    Fasta,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    ensure!(
        cli.width <= MAX_WIDTH,
        "The segment width is {}, but must be at most {MAX_WIDTH}",
        cli.width
    );

    let dialect = InputDialect::from(cli.dialect);
    let input = load_input(&cli.input, dialect)?;

    let mut store = ReferenceStore::enter_reference(&input.reference)?
        .with_reference_gap_characters(dialect.reference_gap_characters().iter().copied());
    info!(
        "Entered reference '{}' of length {}",
        store.reference().name(),
        store.reference().len()
    );

    let mut rejected = 0usize;
    for record in &input.records {
        if let Err(error) = store.add_alignment(record) {
            if cli.strict {
                bail!("Rejected pairwise alignment: {error}");
            }
            warn!("Skipping pairwise alignment: {error}");
            rejected += 1;
        }
    }
    info!(
        "Merging {} pairwise alignments, {rejected} were rejected",
        store.alignment_count()
    );

    let display = store.synthesize();
    info!(
        "The merged alignment has {} columns, of which {} are insertion columns",
        display.width(),
        display.insertion_column_count()
    );

    if let Some(output) = &cli.output {
        info!("Writing merged alignment to {output:?}");
        write_output(BufWriter::new(File::create(output)?), &display, &cli)?;
    } else {
        write_output(stdout().lock(), &display, &cli)?;
    }

    if let Some(statistics_path) = &cli.statistics {
        info!("Writing statistics to {statistics_path:?}");
        let statistics = AlignmentStatistics::new(&display);
        let mut output = BufWriter::new(File::create(statistics_path)?);
        write!(output, "{}", toml::to_string(&statistics)?)?;
        output.flush()?;
    }

    Ok(())
}

fn write_output(mut output: impl Write, display: &DisplayAlignment, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Plain => write_plain(&mut output, display, cli.width)?,
        OutputFormat::Fasta => write_fasta(&mut output, display, cli.width)?,
    }
    output.flush()?;
    Ok(())
}
