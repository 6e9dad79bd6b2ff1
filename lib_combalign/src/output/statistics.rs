use crate::{
    GAP_CHARACTER, TERMINATOR,
    synthesize::{ColumnKind, DisplayAlignment, MatchDisplay},
};

/// Summary of a merged alignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentStatistics {
    pub reference_name: String,
    /// Length of the reference without gaps, including the terminator.
    pub reference_length: usize,
    /// Length of the reference display string.
    pub gapped_length: usize,
    pub insertion_columns: usize,
    pub match_count: usize,
    pub matches: Vec<MatchStatistics>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchStatistics {
    pub name: String,
    /// Match residues in reference residue columns.
    pub aligned_residues: usize,
    /// Aligned residues that equal the reference residue.
    pub identical_residues: usize,
    /// Match residues in insertion columns.
    pub inserted_residues: usize,
    /// `identical_residues / aligned_residues`, or zero if nothing is aligned.
    pub identity: f64,
}

impl AlignmentStatistics {
    pub fn new(display: &DisplayAlignment) -> Self {
        Self {
            reference_name: display.reference_name.clone(),
            reference_length: display.width() - display.insertion_column_count(),
            gapped_length: display.width(),
            insertion_columns: display.insertion_column_count(),
            match_count: display.matches.len(),
            matches: display
                .matches
                .iter()
                .map(|match_display| MatchStatistics::new(display, match_display))
                .collect(),
        }
    }
}

impl MatchStatistics {
    fn new(display: &DisplayAlignment, match_display: &MatchDisplay) -> Self {
        let mut aligned_residues = 0;
        let mut identical_residues = 0;
        let mut inserted_residues = 0;

        for ((kind, reference_char), match_char) in display
            .columns
            .iter()
            .zip(display.reference.chars())
            .zip(match_display.sequence.chars())
        {
            if match_char == GAP_CHARACTER || match_char == TERMINATOR {
                continue;
            }

            match kind {
                ColumnKind::Insertion => inserted_residues += 1,
                ColumnKind::Residue => {
                    aligned_residues += 1;
                    if match_char.eq_ignore_ascii_case(&reference_char) {
                        identical_residues += 1;
                    }
                }
            }
        }

        Self {
            name: match_display.name.clone(),
            aligned_residues,
            identical_residues,
            inserted_residues,
            identity: if aligned_residues == 0 {
                0.0
            } else {
                identical_residues as f64 / aligned_residues as f64
            },
        }
    }
}
