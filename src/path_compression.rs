use crate::{forest::Forest, DisjointSetError, DisjointSets, Link};

/// Union by rank plus full path compression.
///
/// After compression a root's rank no longer equals the height of its tree,
/// it is only an upper bound. Amortized cost per operation is near-constant.
#[derive(Clone, Debug)]
pub struct PathCompressionUnionFind {
    forest: Forest,
}

impl PathCompressionUnionFind {
    /// O(n)
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            forest: Forest::new(size),
        }
    }

    /// Root of `x` without compressing, for callers that only hold `&self`.
    /// O(depth)
    pub fn root_of(&self, x: usize) -> Result<usize, DisjointSetError> {
        self.forest.root_of(x)
    }
}

impl DisjointSets for PathCompressionUnionFind {
    #[inline]
    fn len(&self) -> usize {
        self.forest.len()
    }

    #[inline]
    fn link(&self, x: usize) -> Result<Link, DisjointSetError> {
        self.forest.link(x)
    }

    /// Two passes: find the root, then walk the same path again pointing
    /// every node straight at it. This is a mutating read.
    fn find(&mut self, x: usize) -> Result<usize, DisjointSetError> {
        let root = self.forest.root_of(x)?;

        let rewritten = self.forest.compress(x, root);
        if rewritten != 0 {
            tracing::trace!(x, root, rewritten, "compressed find path");
        }

        Ok(root)
    }

    /// Same attachment rule as [`RankHeuristicUnionFind`](crate::RankHeuristicUnionFind).
    fn union_roots(&mut self, root1: usize, root2: usize) -> Result<bool, DisjointSetError> {
        self.forest.check_roots(root1, root2)?;
        if root1 == root2 {
            return Ok(false);
        }

        let root = self.forest.union_by_rank(root1, root2);
        tracing::trace!(root1, root2, root, "union by rank");
        Ok(true)
    }
}
