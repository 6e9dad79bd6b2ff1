//! Renderers for merged alignments.

use std::io::Write;

use log::debug;

use crate::{
    error::Result,
    reference::ReferenceStore,
    segment::{SegmentBlock, format_segments, segment_count, split_into_segments},
    synthesize::DisplayAlignment,
};

pub mod statistics;


/// Writes the alignment as labelled segments of `width` columns.
///
/// If `width` is zero, then every row is written on a single line.
pub fn write_plain(
    mut output: impl Write,
    display: &DisplayAlignment,
    width: usize,
) -> Result<()> {
    let blocks = format_segments(display, width);
    debug!("Writing {} segment blocks", blocks.len());

    if width == 0 {
        for block in &blocks {
            writeln!(output, "{} {}", block.reference, display.reference_header)?;
            for row in &block.rows {
                writeln!(output, "{}", row.correspondence)?;
                writeln!(output, "{}", row.sequence)?;
            }
        }
        return Ok(());
    }

    write_plain_preamble(&mut output, display, width)?;
    for block in &blocks {
        write_segment_block(&mut output, block, display.reference_title())?;
    }

    Ok(())
}

fn write_plain_preamble(
    mut output: impl Write,
    display: &DisplayAlignment,
    width: usize,
) -> Result<()> {
    let segment_count = segment_count(display.width(), width);

    writeln!(output, "Length of gapped reference: {}", display.width())?;
    writeln!(output, "Segment size is {width}")?;
    writeln!(output, "There will be this many segments: {segment_count}")?;
    writeln!(
        output,
        "The reference structure was:  {}",
        display.reference_title()
    )?;
    writeln!(output, "The compared structures were:")?;
    for match_display in &display.matches {
        writeln!(output, "  {}", match_display.name)?;
    }
    writeln!(
        output,
        "There are this many segment sets: {}",
        segment_count * display.matches.len()
    )?;

    Ok(())
}

fn write_segment_block(
    mut output: impl Write,
    block: &SegmentBlock,
    reference_title: &str,
) -> Result<()> {
    writeln!(output, "{} {reference_title}", block.reference)?;
    for row in &block.rows {
        writeln!(output, "{}", row.correspondence)?;
        writeln!(output, "{} {}", row.sequence, row.name)?;
    }
    writeln!(output)?;
    Ok(())
}

/// Writes the gapped reference and matches as fasta records.
///
/// Sequences are wrapped after `width` characters, unless `width` is zero.
pub fn write_fasta(
    mut output: impl Write,
    display: &DisplayAlignment,
    width: usize,
) -> Result<()> {
    let mut write_record = |title: &str, sequence: &str| -> Result<()> {
        writeln!(output, ">{title}")?;
        for line in split_into_segments(sequence, width) {
            writeln!(output, "{line}")?;
        }
        Ok(())
    };

    write_record(display.reference_title(), &display.reference)?;
    for match_display in &display.matches {
        write_record(&match_display.name, &match_display.sequence)?;
    }

    Ok(())
}

/// Writes the per-position records of the store, one line per position.
pub fn write_positions(mut output: impl Write, store: &ReferenceStore) -> Result<()> {
    let reference = store.reference();
    writeln!(output, "Reference: {}", reference.name())?;
    writeln!(output, "{}", reference.header())?;
    writeln!(output, "{}", reference.sequence())?;
    writeln!(output, "Matches:")?;
    for name in store.match_names().iter_values() {
        writeln!(output, "  {name}")?;
    }

    writeln!(
        output,
        "Leading insertions: {}",
        format_insertions(store.leading_insertions())
    )?;
    for (position, record) in store.positions().iter() {
        writeln!(
            output,
            "{:>6} {} matches: '{}' correspondences: '{}' insertions: {}",
            position.as_usize() + 1,
            record
                .ref_char()
                .unwrap_or(reference.residues()[position.as_usize()]),
            record.matches().iter().collect::<String>(),
            record.correspondences().iter().collect::<String>(),
            format_insertions(record.insertions()),
        )?;
    }

    Ok(())
}

fn format_insertions(insertions: &[String]) -> String {
    let quoted: Vec<_> = insertions
        .iter()
        .map(|insertion| format!("'{insertion}'"))
        .collect();
    format!("[{}]", quoted.join(", "))
}
