use crate::{forest::Forest, DisjointSetError, DisjointSets, Link};

/// Union-find with the union-by-rank (height) heuristic.
///
/// A root's rank only grows when two trees of equal rank are merged, so a
/// tree of rank `r` holds at least `2^r` elements and `find` is O(log n)
/// without any compression.
#[derive(Clone, Debug)]
pub struct RankHeuristicUnionFind {
    forest: Forest,
}

impl RankHeuristicUnionFind {
    /// O(n)
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            forest: Forest::new(size),
        }
    }
}

impl DisjointSets for RankHeuristicUnionFind {
    #[inline]
    fn len(&self) -> usize {
        self.forest.len()
    }

    #[inline]
    fn link(&self, x: usize) -> Result<Link, DisjointSetError> {
        self.forest.link(x)
    }

    /// O(log n)
    fn find(&mut self, x: usize) -> Result<usize, DisjointSetError> {
        self.forest.root_of(x)
    }

    /// The strictly taller tree absorbs the other; on a tie `root1` wins and
    /// its rank goes up by one. O(1)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn union_all(sets: &mut RankHeuristicUnionFind) {
        for i in 1..sets.len() {
            let root1 = sets.find(i).unwrap();
            let root2 = sets.find(i - 1).unwrap();
            sets.union_roots(root1, root2).unwrap();
        }
    }

    #[test]
    fn constructor() {
        let mut sets = RankHeuristicUnionFind::new(3);
        assert_eq!(sets.find(0), Ok(0));
        assert_eq!(sets.find(1), Ok(1));
        assert_eq!(sets.find(2), Ok(2));
    }

    #[test]
    fn union() {
        let mut sets = RankHeuristicUnionFind::new(3);
        sets.union_roots(0, 2).unwrap();
        assert_eq!(sets.find(0), sets.find(2));
        assert_ne!(sets.find(0), sets.find(1));

        let (root1, root2) = (sets.find(1).unwrap(), sets.find(2).unwrap());
        sets.union_roots(root1, root2).unwrap();
        assert_eq!(sets.find(1), sets.find(2));
        assert_eq!(sets.find(0), sets.find(1));
    }

    #[test]
    fn taller_tree_absorbs_shorter() {
        let mut sets = RankHeuristicUnionFind::new(3);
        sets.union_roots(1, 2).unwrap();
        assert_eq!(sets.link(1), Ok(Link::Root { rank: 1 }));

        // 0 is passed first but is shorter, so it goes under 1.
        sets.union_roots(0, 1).unwrap();
        assert_eq!(sets.link(0), Ok(Link::Child { parent: 1 }));
        assert_eq!(sets.link(1), Ok(Link::Root { rank: 1 }));
    }

    #[test]
    fn rank_is_logarithmic_for_balanced_merges() {
        const N: usize = 1 << 10;
        let mut sets = RankHeuristicUnionFind::new(N);

        let mut width = 1;
        while width < N {
            for start in (0..N).step_by(2 * width) {
                let root1 = sets.find(start).unwrap();
                let root2 = sets.find(start + width).unwrap();
                sets.union_roots(root1, root2).unwrap();
            }
            width *= 2;
        }

        let root = sets.find(N - 1).unwrap();
        assert_eq!(sets.link(root), Ok(Link::Root { rank: 10 }));
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn chain_of_unions_stays_shallow() {
        let mut sets = RankHeuristicUnionFind::new(2048);
        union_all(&mut sets);

        let root = sets.find(0).unwrap();
        assert_eq!(sets.link(root), Ok(Link::Root { rank: 1 }));
        for i in 0..sets.len() {
            assert_eq!(sets.find(i), Ok(root));
        }
    }

    #[test]
    fn large_chain_has_a_single_representative() {
        const N: usize = 10_240_000;
        let mut sets = RankHeuristicUnionFind::new(N);
        union_all(&mut sets);

        let root = sets.find(0).unwrap();
        for i in 0..N {
            assert_eq!(sets.find(i), Ok(root));
        }
    }

    #[test]
    fn rejects_non_roots_without_mutating() {
        let mut sets = RankHeuristicUnionFind::new(3);
        sets.union_roots(0, 1).unwrap();

        assert_eq!(
            sets.union_roots(1, 2),
            Err(DisjointSetError::InvalidArgument { index: 1, root: 0 })
        );
        assert_eq!(sets.link(0), Ok(Link::Root { rank: 1 }));
        assert_eq!(sets.link(2), Ok(Link::Root { rank: 0 }));
    }
}
