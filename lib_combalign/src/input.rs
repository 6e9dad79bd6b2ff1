//! Input adapters that turn the text output of pairwise aligners into [`PairwiseRecord`]s.
//!
//! An input file starts with the reference in fasta format, with the sequence on a single line.
//! The pairwise alignments follow in one of the [`InputDialect`]s.

use std::io::Read;

use log::{debug, info};

use crate::{
    error::{Error, Result},
    ingest::PairwiseRecord,
    io::is_blank_line,
    reference::ReferenceInput,
};

mod fixed_column;
mod tm_align;

#[cfg(test)]
mod tests;

/// The format of the pairwise alignments in an input file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum InputDialect {
    /// Four lines per alignment: match name, reference line, correspondence line and match line.
    #[default]
    TmAlign,
    /// Fragments in fixed columns, tagged by a record type prefix.
    ///
    /// ```text
    /// NAME       1abc_A
    /// REF      1 MGPKAKAEA..SKPHQ
    /// CORR                  ..
    /// MTCH     1 ---------TDPA---
    /// ```
    FixedColumn,
}

/// The normalised content of an input file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParsedInput {
    pub reference: ReferenceInput,
    pub records: Vec<PairwiseRecord>,
}

impl InputDialect {
    /// The characters that mark a gap in the reference line of this dialect.
    pub fn reference_gap_characters(&self) -> &'static [char] {
        match self {
            Self::TmAlign => &['-'],
            Self::FixedColumn => &['-', '.'],
        }
    }

    /// Parses the pairwise alignments.
    ///
    /// `first_line_number` is the one-based line number of `lines[0]` in the input file, used for error messages.
    pub fn parse_pairwise_records(
        &self,
        lines: &[&str],
        first_line_number: usize,
    ) -> Result<Vec<PairwiseRecord>> {
        match self {
            Self::TmAlign => Ok(tm_align::parse(lines)),
            Self::FixedColumn => fixed_column::parse(lines, first_line_number),
        }
    }
}

pub fn read_input(mut reader: impl Read, dialect: InputDialect) -> Result<ParsedInput> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_input(&input, dialect)
}

pub fn parse_input(input: &str, dialect: InputDialect) -> Result<ParsedInput> {
    let mut lines: Vec<_> = input.lines().collect();
    while lines.last().is_some_and(|line| is_blank_line(line)) {
        lines.pop();
    }
    debug!("Input has {} lines", lines.len());

    let reference = parse_reference(&lines)?;
    let records = dialect.parse_pairwise_records(lines.get(2..).unwrap_or_default(), 3)?;
    info!("Found {} pairwise alignments", records.len());

    Ok(ParsedInput { reference, records })
}

/// Parses the reference from the first two lines.
///
/// Missing lines result in missing fields, which are rejected when entering the reference.
fn parse_reference(lines: &[&str]) -> Result<ReferenceInput> {
    let mut reference = ReferenceInput::default();

    if let Some(header) = lines.first() {
        let header = header.trim_end();
        let Some(name) = header.strip_prefix('>') else {
            return Err(Error::Parser {
                line: 1,
                message: format!("expected a fasta header starting with '>', but found '{header}'"),
            });
        };

        reference.name = Some(name.trim().to_string());
        reference.header = Some(header.to_string());
    }

    if let Some(sequence) = lines.get(1) {
        reference.sequence = Some(sequence.trim().to_string());
    }

    Ok(reference)
}
