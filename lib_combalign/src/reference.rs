use log::debug;
use tagged_vec::TaggedVec;

use crate::{
    GAP_CHARACTER, TERMINATOR,
    error::{InvalidReference, ReferenceField},
    index_types::{MatchIndex, ReferencePosition},
};


/// A reference as delivered by an input adapter.
///
/// Every field may be absent, since the adapter may not have found it in its input.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ReferenceInput {
    pub name: Option<String>,
    pub header: Option<String>,
    pub sequence: Option<String>,
}

/// The validated reference.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReferenceRecord {
    name: String,
    header: String,
    /// Ends with [`TERMINATOR`].
    residues: Vec<char>,
}

/// Everything the pairwise alignments recorded about one reference residue.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PositionRecord {
    ref_char: Option<char>,
    matches: Vec<char>,
    correspondences: Vec<char>,
    /// `insertions[j]` holds the characters of match `j` between this residue and the next one.
    insertions: Vec<String>,
}

/// Holds the reference and accumulates the pairwise alignments against it.
///
/// Each accepted pairwise alignment appends exactly one entry to every per-match list,
/// so all lists always have length [`Self::alignment_count`].
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    pub(crate) reference: ReferenceRecord,
    pub(crate) positions: TaggedVec<ReferencePosition, PositionRecord>,
    /// Characters of each match that precede the first reference residue.
    pub(crate) leading_insertions: Vec<String>,
    pub(crate) match_names: TaggedVec<MatchIndex, String>,
    pub(crate) reference_gap_characters: Vec<char>,
}

impl ReferenceInput {
    pub fn new(
        name: impl Into<String>,
        header: impl Into<String>,
        sequence: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            header: Some(header.into()),
            sequence: Some(sequence.into()),
        }
    }
}

impl ReferenceRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn residues(&self) -> &[char] {
        &self.residues
    }

    /// The number of residues, including the terminator.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn sequence(&self) -> String {
        self.residues.iter().collect()
    }
}

impl PositionRecord {
    /// The reference residue, once any alignment has been added.
    pub fn ref_char(&self) -> Option<char> {
        self.ref_char
    }

    pub fn matches(&self) -> &[char] {
        &self.matches
    }

    pub fn correspondences(&self) -> &[char] {
        &self.correspondences
    }

    pub fn insertions(&self) -> &[String] {
        &self.insertions
    }

    pub(crate) fn record_residue(&mut self, ref_char: char, match_char: char, correspondence: char) {
        self.ref_char = Some(ref_char);
        self.matches.push(match_char);
        self.correspondences.push(correspondence);
    }

    pub(crate) fn record_insertion(&mut self, insertion: String) {
        self.insertions.push(insertion);
    }
}

impl ReferenceStore {
    /// Validates the reference and allocates one empty [`PositionRecord`] per residue.
    ///
    /// A [`TERMINATOR`] is appended to the sequence if it does not end with one already.
    pub fn enter_reference(reference: &ReferenceInput) -> Result<Self, InvalidReference> {
        let name = reference
            .name
            .as_ref()
            .ok_or(InvalidReference::MissingField(ReferenceField::Name))?;
        let header = reference
            .header
            .as_ref()
            .ok_or(InvalidReference::MissingField(ReferenceField::Header))?;
        let sequence = reference
            .sequence
            .as_ref()
            .ok_or(InvalidReference::MissingField(ReferenceField::Sequence))?;
        if sequence.is_empty() {
            return Err(InvalidReference::EmptySequence);
        }

        let mut residues: Vec<char> = sequence.chars().collect();
        if residues.last() != Some(&TERMINATOR) {
            residues.push(TERMINATOR);
        }
        debug!(
            "Entering reference '{name}' with {} positions",
            residues.len()
        );

        let positions = residues.iter().map(|_| PositionRecord::default()).collect();
        Ok(Self {
            reference: ReferenceRecord {
                name: name.clone(),
                header: header.clone(),
                residues,
            },
            positions,
            leading_insertions: Vec::new(),
            match_names: TaggedVec::default(),
            reference_gap_characters: vec![GAP_CHARACTER],
        })
    }

    /// Sets the characters that mark a gap in the reference line of a pairwise alignment.
    ///
    /// Defaults to [`GAP_CHARACTER`].
    /// Must be called before the first alignment is added.
    pub fn with_reference_gap_characters(
        mut self,
        gap_characters: impl IntoIterator<Item = char>,
    ) -> Self {
        debug_assert_eq!(
            self.alignment_count(),
            0,
            "gap characters changed after alignments were added"
        );
        self.reference_gap_characters = gap_characters.into_iter().collect();
        self
    }

    pub fn reference(&self) -> &ReferenceRecord {
        &self.reference
    }

    pub fn positions(&self) -> &TaggedVec<ReferencePosition, PositionRecord> {
        &self.positions
    }

    pub fn position(&self, position: ReferencePosition) -> &PositionRecord {
        &self.positions[position]
    }

    /// Insertions of each match in front of the first reference residue.
    pub fn leading_insertions(&self) -> &[String] {
        &self.leading_insertions
    }

    pub fn match_names(&self) -> &TaggedVec<MatchIndex, String> {
        &self.match_names
    }

    /// The number of pairwise alignments added so far.
    pub fn alignment_count(&self) -> usize {
        self.match_names.len()
    }

    pub fn is_reference_gap(&self, c: char) -> bool {
        self.reference_gap_characters.contains(&c)
    }
}
