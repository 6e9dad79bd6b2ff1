use log::{debug, trace, warn};

use crate::{
    TERMINATOR,
    error::{IngestError, PairwiseField},
    index_types::{MatchIndex, ReferencePosition},
    reference::ReferenceStore,
};


/// One pairwise alignment of a match sequence against the reference, as delivered by an input adapter.
///
/// The three lines are rows of the same alignment, so they are expected to have equal lengths.
///
/// **Example:**
/// ```text
/// MGPKAKAEA--SKPHQIPQIPVKLPFVTAPDAL  reference line
///           ..         .   .  ::::   correspondence line
/// ---------TDPA---------P---P--PTAL  match line
/// ```
/// Here `TD` is inserted between the reference residues `A` and `S`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PairwiseRecord {
    pub match_name: Option<String>,
    pub reference_line: Option<String>,
    pub correspondence_line: Option<String>,
    pub match_line: Option<String>,
}

impl PairwiseRecord {
    pub fn new(
        match_name: impl Into<String>,
        reference_line: impl Into<String>,
        correspondence_line: impl Into<String>,
        match_line: impl Into<String>,
    ) -> Self {
        Self {
            match_name: Some(match_name.into()),
            reference_line: Some(reference_line.into()),
            correspondence_line: Some(correspondence_line.into()),
            match_line: Some(match_line.into()),
        }
    }

    /// True if no field has been set yet.
    pub fn is_empty(&self) -> bool {
        self.match_name.is_none()
            && self.reference_line.is_none()
            && self.correspondence_line.is_none()
            && self.match_line.is_none()
    }
}

impl ReferenceStore {
    /// Folds a pairwise alignment into the position records.
    ///
    /// The record is fully validated before any position is touched,
    /// so on error the store is unchanged.
    pub fn add_alignment(&mut self, record: &PairwiseRecord) -> Result<MatchIndex, IngestError> {
        let match_name = required(&record.match_name, PairwiseField::MatchName)?;
        let reference_line = required(&record.reference_line, PairwiseField::ReferenceLine)?;
        let correspondence_line =
            required(&record.correspondence_line, PairwiseField::CorrespondenceLine)?;
        let match_line = required(&record.match_line, PairwiseField::MatchLine)?;
        debug!("Adding pairwise alignment of '{match_name}'");

        for line in [reference_line, correspondence_line, match_line] {
            if line.contains(['\n', '\r']) {
                return Err(IngestError::MalformedRecord {
                    match_name: match_name.clone(),
                    reason: "an alignment line contains a line break".to_string(),
                });
            }
        }

        let any_empty = [reference_line, correspondence_line, match_line]
            .iter()
            .any(|line| line.is_empty());
        let reference_line = pad_with_terminator(reference_line);
        let correspondence_line = pad_with_terminator(correspondence_line);
        let match_line = pad_with_terminator(match_line);

        if any_empty
            || reference_line.len() != correspondence_line.len()
            || reference_line.len() != match_line.len()
        {
            return Err(IngestError::LengthMismatch {
                match_name: match_name.clone(),
                reference_length: reference_line.len(),
                correspondence_length: correspondence_line.len(),
                match_length: match_line.len(),
            });
        }

        let residue_count = reference_line
            .iter()
            .filter(|c| !self.is_reference_gap(**c))
            .count();
        if residue_count != self.positions.len() {
            return Err(IngestError::MalformedRecord {
                match_name: match_name.clone(),
                reason: format!(
                    "the reference line covers {residue_count} residues, but the reference has {}",
                    self.positions.len()
                ),
            });
        }

        // Nothing below can fail anymore.
        let mut reference_position = ReferencePosition::from(0);
        let mut gap_buffer = String::new();

        for ((reference_char, correspondence), match_char) in reference_line
            .iter()
            .copied()
            .zip(correspondence_line.iter().copied())
            .zip(match_line.iter().copied())
        {
            if self.is_reference_gap(reference_char) {
                gap_buffer.push(match_char);
                continue;
            }

            let ref_char = self.reference.residues()[reference_position.as_usize()];
            if !ref_char.eq_ignore_ascii_case(&reference_char) {
                warn!(
                    "Reference line of '{match_name}' has '{reference_char}' at reference position {}, but the reference has '{ref_char}'",
                    reference_position.as_usize() + 1
                );
            }

            self.positions[reference_position].record_residue(ref_char, match_char, correspondence);
            let insertion = std::mem::take(&mut gap_buffer);
            if !insertion.is_empty() {
                trace!(
                    "Insertion '{insertion}' before reference position {}",
                    reference_position.as_usize()
                );
            }
            if let Some(previous_position) = reference_position.checked_sub(1) {
                self.positions[previous_position].record_insertion(insertion);
            } else {
                self.leading_insertions.push(insertion);
            }
            reference_position += 1;
        }

        // There is no residue after the terminator, so it takes whatever follows it.
        let last_position = ReferencePosition::from(self.positions.len() - 1);
        self.positions[last_position].record_insertion(gap_buffer);

        Ok(self.match_names.push(match_name.clone()))
    }
}

fn required(field: &Option<String>, name: PairwiseField) -> Result<&String, IngestError> {
    field.as_ref().ok_or(IngestError::MissingField(name))
}

/// Appends a [`TERMINATOR`] unless the line already ends with one.
fn pad_with_terminator(line: &str) -> Vec<char> {
    let mut result: Vec<char> = line.chars().collect();
    if result.last() != Some(&TERMINATOR) {
        result.push(TERMINATOR);
    }
    result
}
