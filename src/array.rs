use std::fmt;

use num::PrimInt;

use crate::DisjointSetError;

/// Minimal disjoint set over any primitive integer index type.
///
/// No rank, no compression. Elements whose index does not fit in `T` exist
/// but cannot be addressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayDisjointSet<T: PrimInt> {
    /// `None` marks a root.
    parents: Vec<Option<T>>,
}

impl<T: PrimInt> ArrayDisjointSet<T> {
    /// O(n)
    pub fn new(size: usize) -> Self {
        Self {
            parents: vec![None; size],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    fn index(&self, x: T) -> Result<usize, DisjointSetError> {
        match x.to_usize() {
            Some(i) if i < self.len() => Ok(i),
            _ => Err(DisjointSetError::IndexOutOfRange {
                index: x.to_i128().unwrap_or(i128::MAX),
                len: self.len(),
            }),
        }
    }

    /// `None` if `x` is a root.
    pub fn parent(&self, x: T) -> Result<Option<T>, DisjointSetError> {
        Ok(self.parents[self.index(x)?])
    }

    /// O(depth)
    pub fn find(&self, mut x: T) -> Result<T, DisjointSetError> {
        let mut i = self.index(x)?;
        while let Some(parent) = self.parents[i] {
            x = parent;
            // Parents are only ever written from validated indices.
            i = self.index(x)?;
        }
        Ok(x)
    }

    /// Hangs `root1` under `root2`. Both have to be roots.
    pub fn union_roots(&mut self, root1: T, root2: T) -> Result<bool, DisjointSetError> {
        let i = self.index(root1)?;
        let j = self.index(root2)?;

        for (index, x) in [(i, root1), (j, root2)] {
            if self.parents[index].is_some() {
                let root = self.find(x)?;
                tracing::debug!(index, "rejected union of a non-root element");
                return Err(DisjointSetError::InvalidArgument {
                    index,
                    root: self.index(root)?,
                });
            }
        }

        if i == j {
            return Ok(false);
        }
        self.parents[i] = Some(root2);
        Ok(true)
    }
}

impl<T: PrimInt> fmt::Display for ArrayDisjointSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.len())
    }
}
