use crate::{forest::Forest, DisjointSetError, DisjointSets, Link};

/// Baseline union-find: no balancing, no compression.
///
/// Repeated unions in increasing order degrade into a linked list, so `find`
/// is O(n) in the worst case.
#[derive(Clone, Debug)]
pub struct NaiveUnionFind {
    forest: Forest,
}

impl NaiveUnionFind {
    /// O(n)
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            forest: Forest::new(size),
        }
    }
}

impl DisjointSets for NaiveUnionFind {
    #[inline]
    fn len(&self) -> usize {
        self.forest.len()
    }

    #[inline]
    fn link(&self, x: usize) -> Result<Link, DisjointSetError> {
        self.forest.link(x)
    }

    /// O(depth), worst case O(n)
    fn find(&mut self, x: usize) -> Result<usize, DisjointSetError> {
        self.forest.root_of(x)
    }

    /// Hangs `root2` under `root1`, whatever their heights. O(1)
    fn union_roots(&mut self, root1: usize, root2: usize) -> Result<bool, DisjointSetError> {
        self.forest.check_roots(root1, root2)?;
        if root1 == root2 {
            return Ok(false);
        }

        self.forest.attach(root2, root1);
        tracing::trace!(root1, root2, "naive union");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor() {
        let mut sets = NaiveUnionFind::new(3);
        assert_eq!(sets.find(0), Ok(0));
        assert_eq!(sets.find(1), Ok(1));
        assert_eq!(sets.find(2), Ok(2));
    }

    #[test]
    fn union() {
        let mut sets = NaiveUnionFind::new(3);
        assert_eq!(sets.union_roots(0, 2), Ok(true));
        assert_eq!(sets.find(0), sets.find(2));
        assert_ne!(sets.find(0), sets.find(1));

        let (root1, root2) = (sets.find(1).unwrap(), sets.find(2).unwrap());
        sets.union_roots(root1, root2).unwrap();
        assert_eq!(sets.find(1), sets.find(2));
        assert_eq!(sets.find(0), sets.find(1));
    }

    #[test]
    fn second_root_always_goes_under_the_first() {
        let mut sets = NaiveUnionFind::new(4);
        sets.union_roots(0, 1).unwrap();
        sets.union_roots(2, 0).unwrap();

        assert_eq!(sets.link(0), Ok(Link::Child { parent: 2 }));
        assert_eq!(sets.link(2), Ok(Link::Root { rank: 0 }));
    }

    #[test]
    fn increasing_unions_build_a_chain() {
        const N: usize = 64;
        let mut sets = NaiveUnionFind::new(N);
        for i in 1..N {
            let root1 = sets.find(i).unwrap();
            let root2 = sets.find(i - 1).unwrap();
            sets.union_roots(root1, root2).unwrap();
        }

        // Every element but the last hangs under its successor.
        for i in 0..N - 1 {
            assert_eq!(sets.link(i), Ok(Link::Child { parent: i + 1 }));
        }
        assert_eq!(sets.find(0), Ok(N - 1));
        // No compression: the chain is still there.
        assert_eq!(sets.link(0), Ok(Link::Child { parent: 1 }));
    }

    #[test]
    fn out_of_range() {
        let mut sets = NaiveUnionFind::new(3);
        assert_eq!(
            sets.find(3),
            Err(DisjointSetError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            sets.union_roots(0, usize::MAX),
            Err(DisjointSetError::IndexOutOfRange {
                index: usize::MAX as i128,
                len: 3
            })
        );
    }

    #[test]
    fn rejects_non_roots_without_mutating() {
        let mut sets = NaiveUnionFind::new(3);
        sets.union_roots(0, 1).unwrap();

        assert_eq!(
            sets.union_roots(2, 1),
            Err(DisjointSetError::InvalidArgument { index: 1, root: 0 })
        );
        assert_eq!(sets.link(2), Ok(Link::Root { rank: 0 }));
        assert_eq!(sets.set_count(), 2);
    }

    #[test]
    fn self_union_is_a_no_op() {
        let mut sets = NaiveUnionFind::new(2);
        assert_eq!(sets.union_roots(1, 1), Ok(false));
        assert_eq!(sets.link(1), Ok(Link::Root { rank: 0 }));
    }
}
