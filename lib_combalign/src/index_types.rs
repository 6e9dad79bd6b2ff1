use strong_type::StrongType;

/// A position in the ungapped reference, including the terminator.
#[derive(StrongType)]
#[strong_type(conversion)]
pub struct ReferencePosition(usize);

/// The index of a pairwise alignment in ingestion order.
///
/// All per-match lists of the merge are ordered by this index.
#[derive(StrongType)]
#[strong_type(conversion)]
pub struct MatchIndex(usize);

impl ReferencePosition {
    pub fn as_usize(&self) -> usize {
        self.0
    }

    pub fn checked_sub(&self, other: usize) -> Option<Self> {
        self.0.checked_sub(other).map(Self)
    }
}

impl std::ops::AddAssign<usize> for ReferencePosition {
    fn add_assign(&mut self, other: usize) {
        self.0 += other
    }
}
