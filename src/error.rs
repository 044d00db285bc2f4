use thiserror::Error;

/// Caller bugs detected by the disjoint-set structures.
///
/// None of these are recoverable: a rejected call leaves the partition
/// untouched, and the caller is expected to fix its indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DisjointSetError {
    /// The element index lies outside `[0, len)`.
    #[error("element {index} is out of range for a partition of {len} elements")]
    IndexOutOfRange {
        /// Offending index. Wide enough to hold negative generic indices.
        index: i128,
        len: usize,
    },
    /// A non-root element was passed where a root is required.
    #[error("element {index} is not a root (its root is {root})")]
    InvalidArgument { index: usize, root: usize },
}

impl DisjointSetError {
    #[inline]
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: index as i128,
            len,
        }
    }
}
