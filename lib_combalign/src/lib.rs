//! Merges a set of pairwise alignments, each aligning one match sequence against a shared reference,
//! into a single multiple sequence alignment anchored on that reference.
//!
//! The workflow is:
//!  1. enter the reference with [`ReferenceStore::enter_reference`](reference::ReferenceStore::enter_reference),
//!  2. add the pairwise alignments one at a time with [`ReferenceStore::add_alignment`](reference::ReferenceStore::add_alignment),
//!  3. build the display strings with [`ReferenceStore::synthesize`](reference::ReferenceStore::synthesize),
//!  4. split them into labelled segments with [`segment::format_segments`] and render them with [`output`].

pub mod error;
pub mod index_types;
pub mod ingest;
pub mod input;
mod io;
pub mod output;
pub mod reference;
pub mod segment;
pub mod synthesize;

/// Marks the end of the reference and of every alignment line.
pub const TERMINATOR: char = '*';

/// The character rendered for a gap in a display string.
pub const GAP_CHARACTER: char = '-';
