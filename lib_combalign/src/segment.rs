use itertools::Itertools;

use crate::synthesize::DisplayAlignment;


/// One group of segments that share the same column range.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SegmentBlock {
    /// The index of this block, counting from zero.
    pub index: usize,
    pub reference: String,
    /// One row per match, in ingestion order.
    pub rows: Vec<SegmentRow>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SegmentRow {
    pub name: String,
    pub correspondence: String,
    pub sequence: String,
}

/// Splits the display strings into blocks of `width` columns.
///
/// Each block holds the reference segment once, followed by the correspondence and sequence segment
/// of every match. The last block may be narrower than `width`.
/// If `width` is zero, then the display strings are not split and a single block is returned.
pub fn format_segments(display: &DisplayAlignment, width: usize) -> Vec<SegmentBlock> {
    if width == 0 {
        return vec![SegmentBlock {
            index: 0,
            reference: display.reference.clone(),
            rows: display
                .matches
                .iter()
                .map(|display| SegmentRow {
                    name: display.name.clone(),
                    correspondence: display.correspondence.clone(),
                    sequence: display.sequence.clone(),
                })
                .collect(),
        }];
    }

    let reference = split_into_segments(&display.reference, width);
    let segment_count = segment_count(display.width(), width);
    debug_assert_eq!(reference.len(), segment_count);

    let matches: Vec<_> = display
        .matches
        .iter()
        .map(|display| {
            (
                &display.name,
                split_into_segments(&display.correspondence, width),
                split_into_segments(&display.sequence, width),
            )
        })
        .collect();

    reference
        .into_iter()
        .enumerate()
        .map(|(index, reference)| SegmentBlock {
            index,
            reference,
            rows: matches
                .iter()
                .map(|(name, correspondence, sequence)| SegmentRow {
                    name: (*name).clone(),
                    correspondence: correspondence.get(index).cloned().unwrap_or_default(),
                    sequence: sequence.get(index).cloned().unwrap_or_default(),
                })
                .collect(),
        })
        .collect()
}

/// The number of segments of width `width` needed to cover `length` columns.
pub fn segment_count(length: usize, width: usize) -> usize {
    if width == 0 {
        1
    } else {
        length.div_ceil(width)
    }
}

/// Splits a string into chunks of `width` characters.
///
/// Concatenating the chunks yields the original string.
/// If `width` is zero, then a non-empty string is returned as a single chunk.
pub fn split_into_segments(string: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return if string.is_empty() {
            Vec::new()
        } else {
            vec![string.to_string()]
        };
    }

    string
        .chars()
        .chunks(width)
        .into_iter()
        .map(|chunk| chunk.collect())
        .collect()
}
