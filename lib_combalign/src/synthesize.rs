use std::collections::VecDeque;

use log::{debug, trace};

use crate::{GAP_CHARACTER, reference::ReferenceStore};


/// The correspondence symbol of an insertion column.
const INSERTION_CORRESPONDENCE: char = ' ';

/// The merged alignment, with one display string per row.
///
/// All display strings have the same number of characters.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayAlignment {
    pub reference_name: String,
    pub reference_header: String,
    /// The reference with a gap in every insertion column.
    pub reference: String,
    pub columns: Vec<ColumnKind>,
    /// One entry per match, in ingestion order.
    pub matches: Vec<MatchDisplay>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchDisplay {
    pub name: String,
    pub correspondence: String,
    pub sequence: String,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnKind {
    /// A column holding a reference residue.
    Residue,
    /// A column holding inserted match characters and a gap in the reference.
    Insertion,
}

impl ReferenceStore {
    /// Builds the display strings of the merged alignment.
    ///
    /// Before each reference residue, the insertions that the matches have in front of it are
    /// drained column by column. The number of insertion columns is the length of the longest
    /// pending insertion, and shorter insertions are padded with gaps.
    pub fn synthesize(self) -> DisplayAlignment {
        let match_count = self.alignment_count();
        debug!(
            "Synthesizing {match_count} matches over {} reference positions",
            self.positions.len()
        );

        let mut pending: Vec<VecDeque<char>> = vec![VecDeque::new(); match_count];
        let mut reference = String::new();
        let mut columns = Vec::new();
        let mut matches: Vec<_> = self
            .match_names
            .iter_values()
            .map(|name| MatchDisplay {
                name: name.clone(),
                correspondence: String::new(),
                sequence: String::new(),
            })
            .collect();

        let mut preceding_insertions: &[String] = &self.leading_insertions;
        for (position, record) in self.positions.iter() {
            for (queue, insertion) in pending.iter_mut().zip(preceding_insertions) {
                queue.extend(insertion.chars());
            }

            let mut insertion_columns = 0usize;
            while pending.iter().any(|queue| !queue.is_empty()) {
                reference.push(GAP_CHARACTER);
                columns.push(ColumnKind::Insertion);
                for (queue, display) in pending.iter_mut().zip(&mut matches) {
                    display
                        .sequence
                        .push(queue.pop_front().unwrap_or(GAP_CHARACTER));
                    display.correspondence.push(INSERTION_CORRESPONDENCE);
                }
                insertion_columns += 1;
            }
            if insertion_columns > 0 {
                trace!(
                    "Opened {insertion_columns} insertion columns before reference position {}",
                    position.as_usize()
                );
            }

            reference.push(
                record
                    .ref_char()
                    .unwrap_or(self.reference.residues()[position.as_usize()]),
            );
            columns.push(ColumnKind::Residue);
            for ((display, match_char), correspondence) in matches
                .iter_mut()
                .zip(record.matches())
                .zip(record.correspondences())
            {
                display.sequence.push(*match_char);
                display.correspondence.push(*correspondence);
            }

            preceding_insertions = record.insertions();
        }

        DisplayAlignment {
            reference_name: self.reference.name().to_string(),
            reference_header: self.reference.header().to_string(),
            reference,
            columns,
            matches,
        }
    }
}

impl DisplayAlignment {
    /// The number of columns, which is the character count of every display string.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn insertion_column_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|kind| **kind == ColumnKind::Insertion)
            .count()
    }

    /// The reference header without its leading `>`.
    pub fn reference_title(&self) -> &str {
        self.reference_header
            .strip_prefix('>')
            .unwrap_or(&self.reference_header)
    }
}
