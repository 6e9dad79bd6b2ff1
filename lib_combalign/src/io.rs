use std::ops::Range;

use crate::{TERMINATOR, error::Error};

/// Returns the substring covering the character columns in `range`.
///
/// Columns past the end of the line are treated as empty.
pub fn column_range(line: &str, range: Range<usize>) -> &str {
    let byte_offset = |column: usize| {
        line.char_indices()
            .nth(column)
            .map(|(offset, _)| offset)
            .unwrap_or(line.len())
    };

    let start = byte_offset(range.start);
    let end = byte_offset(range.end).max(start);
    &line[start..end]
}

/// Returns the substring from character column `start` to the end of the line.
pub fn column_suffix(line: &str, start: usize) -> &str {
    column_range(line, start..usize::MAX)
}

/// Fits a correspondence line with blanks to cover exactly its reference line.
///
/// Aligners commonly drop or add trailing blanks of the correspondence line.
/// Short lines are padded with blanks, and trailing whitespace past the reference line is cut.
/// Other characters past the reference line are kept, so that ingestion rejects the record.
/// If only the reference line carries a terminator, the terminator column is not covered,
/// since it is added to the correspondence line on ingestion.
pub fn pad_correspondence(reference_line: &str, correspondence_line: &str) -> String {
    let mut target_length = reference_line.chars().count();
    if reference_line.ends_with(TERMINATOR) && !correspondence_line.ends_with(TERMINATOR) {
        target_length -= 1;
    }

    let mut result: Vec<char> = correspondence_line.chars().collect();
    while result.len() > target_length && result.last().is_some_and(|c| c.is_whitespace()) {
        result.pop();
    }
    result.resize(result.len().max(target_length), ' ');
    result.into_iter().collect()
}

pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

pub fn translate_nom_error(line: usize, error: nom::Err<nom::error::Error<&str>>) -> Error {
    match error {
        nom::Err::Incomplete(needed) => Error::Parser {
            line,
            message: format!("incomplete input: {needed:?}"),
        },
        nom::Err::Error(error) | nom::Err::Failure(error) => Error::Parser {
            line,
            message: format!(
                "unexpected input '{}' ({:?})",
                error.input.trim_end(),
                error.code
            ),
        },
    }
}
