use log::trace;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res, opt, value},
    sequence::{terminated, tuple},
};

use crate::{
    error::{Error, Result},
    ingest::PairwiseRecord,
    io::{column_range, column_suffix, is_blank_line, pad_correspondence, translate_nom_error},
};

const RECORD_TYPE_COLUMNS: std::ops::Range<usize> = 0..4;
const RESIDUE_NUMBER_COLUMNS: std::ops::Range<usize> = 4..10;
// Column 10 separates the residue number from the payload.
const PAYLOAD_COLUMN: usize = 11;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum RecordType {
    Name,
    Reference,
    Correspondence,
    Match,
}

/// Parses alignments given as fragments in fixed columns.
///
/// Fragments are appended to the alignment started by the last `NAME` line.
pub fn parse(lines: &[&str], first_line_number: usize) -> Result<Vec<PairwiseRecord>> {
    let mut records = Vec::new();
    let mut current_record: Option<PairwiseRecord> = None;
    let mut last_reference_fragment = String::new();

    for (line_number, line) in lines
        .iter()
        .enumerate()
        .map(|(index, line)| (index + first_line_number, *line))
    {
        if is_blank_line(line) || (current_record.is_none() && line.starts_with('#')) {
            continue;
        }

        let (record_type, residue_number) = parse_line_prefix(line)
            .map(|(_, result)| result)
            .map_err(|error| translate_nom_error(line_number, error))?;
        let payload = column_suffix(line, PAYLOAD_COLUMN);
        trace!("Line {line_number}: {record_type:?} {residue_number:?} '{payload}'");

        if record_type == RecordType::Name {
            records.extend(current_record.take());
            current_record = Some(PairwiseRecord {
                match_name: Some(payload.trim().to_string()),
                ..Default::default()
            });
            continue;
        }

        let Some(record) = current_record.as_mut() else {
            return Err(Error::Parser {
                line: line_number,
                message: "alignment fragment before the first NAME line".to_string(),
            });
        };

        match record_type {
            RecordType::Reference => {
                last_reference_fragment = payload.trim_end().to_string();
                append_fragment(&mut record.reference_line, &last_reference_fragment);
            }
            RecordType::Correspondence => {
                let fragment = pad_correspondence(&last_reference_fragment, payload);
                append_fragment(&mut record.correspondence_line, &fragment);
            }
            RecordType::Match => {
                append_fragment(&mut record.match_line, payload.trim_end());
            }
            RecordType::Name => unreachable!(),
        }
    }

    records.extend(current_record);
    Ok(records)
}

fn append_fragment(line: &mut Option<String>, fragment: &str) {
    line.get_or_insert_with(String::new).push_str(fragment);
}

/// Parses the record type and the optional residue number of a line.
fn parse_line_prefix(line: &str) -> IResult<&str, (RecordType, Option<usize>)> {
    let record_type_field = column_range(line, RECORD_TYPE_COLUMNS);
    let (_, record_type) = all_consuming(parse_record_type)(record_type_field)?;
    let residue_number_field = column_range(line, RESIDUE_NUMBER_COLUMNS);
    let (_, residue_number) = all_consuming(parse_residue_number)(residue_number_field)?;

    Ok((column_suffix(line, PAYLOAD_COLUMN), (record_type, residue_number)))
}

fn parse_record_type(input: &str) -> IResult<&str, RecordType> {
    alt((
        value(RecordType::Name, tag("NAME")),
        value(RecordType::Reference, terminated(tag("REF"), opt(char(' ')))),
        value(RecordType::Correspondence, tag("CORR")),
        value(RecordType::Match, tag("MTCH")),
    ))(input)
}

fn parse_residue_number(input: &str) -> IResult<&str, Option<usize>> {
    let (input, (_, residue_number, _)) = tuple((
        space0,
        opt(map_res(digit1, |digits: &str| digits.parse::<usize>())),
        space0,
    ))(input)?;
    Ok((input, residue_number))
}
