use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("A parsing error occurred in line {line}: {message}")]
    Parser { line: usize, message: String },

    #[error("The reference is invalid: {0}")]
    InvalidReference(#[from] InvalidReference),

    #[error("The pairwise alignment was rejected: {0}")]
    Ingest(#[from] IngestError),
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum InvalidReference {
    #[error("the reference record has no {0}")]
    MissingField(ReferenceField),

    #[error("the reference sequence is empty")]
    EmptySequence,
}

/// Reasons for rejecting a pairwise alignment record.
///
/// A rejected record leaves the [`ReferenceStore`](crate::reference::ReferenceStore) unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum IngestError {
    #[error("the pairwise record has no {0}")]
    MissingField(PairwiseField),

    #[error(
        "the alignment lines of '{match_name}' differ in length after padding (reference: {reference_length}, correspondence: {correspondence_length}, match: {match_length})"
    )]
    LengthMismatch {
        match_name: String,
        reference_length: usize,
        correspondence_length: usize,
        match_length: usize,
    },

    #[error("the pairwise record of '{match_name}' is malformed: {reason}")]
    MalformedRecord { match_name: String, reason: String },
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ReferenceField {
    Name,
    Header,
    Sequence,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PairwiseField {
    MatchName,
    ReferenceLine,
    CorrespondenceLine,
    MatchLine,
}

impl std::fmt::Display for ReferenceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Header => write!(f, "header"),
            Self::Sequence => write!(f, "sequence"),
        }
    }
}

impl std::fmt::Display for PairwiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MatchName => write!(f, "match name"),
            Self::ReferenceLine => write!(f, "reference line"),
            Self::CorrespondenceLine => write!(f, "correspondence line"),
            Self::MatchLine => write!(f, "match line"),
        }
    }
}
