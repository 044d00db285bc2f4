use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{DisjointSetError, Link, NaiveUnionFind, PathCompressionUnionFind, RankHeuristicUnionFind};

/// Common surface of the union-find variants.
///
/// `find` takes `&mut self` on every implementation: the path-compression
/// variant rewrites parent links while answering, so even a lookup needs
/// exclusive access. Shared across threads this means a `Mutex`, never an
/// `RwLock` read guard.
pub trait DisjointSets {
    /// Number of elements. Fixed at construction.
    fn len(&self) -> usize;

    /// Inspects one slot without mutating anything.
    fn link(&self, x: usize) -> Result<Link, DisjointSetError>;

    /// Representative of the set containing `x`.
    fn find(&mut self, x: usize) -> Result<usize, DisjointSetError>;

    /// Merges the sets rooted at `root1` and `root2`.
    ///
    /// Both arguments must already be roots (resolve them with [`find`]
    /// first); anything else is rejected with
    /// [`DisjointSetError::InvalidArgument`] and the partition is left
    /// untouched. Returns `false` when `root1 == root2`.
    ///
    /// [`find`]: DisjointSets::find
    fn union_roots(&mut self, root1: usize, root2: usize) -> Result<bool, DisjointSetError>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn is_root(&self, x: usize) -> Result<bool, DisjointSetError> {
        Ok(matches!(self.link(x)?, Link::Root { .. }))
    }

    /// Number of disjoint sets. O(n), does not compress.
    fn set_count(&self) -> usize {
        (0..self.len())
            .filter(|&x| matches!(self.link(x), Ok(Link::Root { .. })))
            .count()
    }

    /// Like [`union_roots`](DisjointSets::union_roots), but accepts any two
    /// elements and resolves their roots first.
    fn union(&mut self, a: usize, b: usize) -> Result<bool, DisjointSetError> {
        let root1 = self.find(a)?;
        let root2 = self.find(b)?;
        self.union_roots(root1, root2)
    }

    fn connected(&mut self, a: usize, b: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(a)? == self.find(b)?)
    }
}

/// Which union-find implementation to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Naive,
    RankHeuristic,
    PathCompression,
}

impl Variant {
    pub const ALL: [Self; 3] = [Self::Naive, Self::RankHeuristic, Self::PathCompression];

    /// O(n)
    pub fn build(self, len: usize) -> Box<dyn DisjointSets> {
        match self {
            Self::Naive => Box::new(NaiveUnionFind::new(len)),
            Self::RankHeuristic => Box::new(RankHeuristicUnionFind::new(len)),
            Self::PathCompression => Box::new(PathCompressionUnionFind::new(len)),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::RankHeuristic => "rank-heuristic",
            Self::PathCompression => "path-compression",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown union-find variant `{0}`; expected `naive`, `rank-heuristic` or `path-compression`")]
pub struct ParseVariantError(String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == normalized)
            .ok_or_else(|| ParseVariantError(s.to_owned()))
    }
}
