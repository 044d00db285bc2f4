use crate::DisjointSetError;

/// What a single element of a partition points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Link {
    /// The element represents its set. `rank` bounds the height of its tree
    /// (always 0 for the naive variant).
    Root { rank: usize },
    /// The element hangs under `parent`.
    Child { parent: usize },
}

/// Packed slot: a non-negative value is a parent index, `-(rank + 1)` marks a root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
struct Slot(isize);

impl Slot {
    const SINGLETON: Self = Self::root(0);

    // `Vec<Slot>` never holds more than `isize::MAX` elements, so neither cast wraps.
    #[inline]
    const fn root(rank: usize) -> Self {
        Self(-(rank as isize) - 1)
    }

    #[inline]
    const fn child(parent: usize) -> Self {
        Self(parent as isize)
    }

    #[inline]
    const fn link(self) -> Link {
        if self.0 < 0 {
            Link::Root {
                rank: (-(self.0 + 1)) as usize,
            }
        } else {
            Link::Child {
                parent: self.0 as usize,
            }
        }
    }
}

/// Array-backed forest shared by the `usize` union-find variants.
#[derive(Clone, Debug)]
pub(crate) struct Forest {
    slots: Vec<Slot>,
}

impl Forest {
    /// O(n)
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![Slot::SINGLETON; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn check(&self, x: usize) -> Result<(), DisjointSetError> {
        if x < self.len() {
            Ok(())
        } else {
            Err(DisjointSetError::out_of_range(x, self.len()))
        }
    }

    #[inline]
    pub fn link(&self, x: usize) -> Result<Link, DisjointSetError> {
        self.check(x)?;
        Ok(self.slots[x].link())
    }

    /// Walks parent links without touching them. O(depth)
    pub fn root_of(&self, x: usize) -> Result<usize, DisjointSetError> {
        self.check(x)?;
        Ok(self.walk(x))
    }

    fn walk(&self, mut x: usize) -> usize {
        while let Link::Child { parent } = self.slots[x].link() {
            x = parent;
        }
        x
    }

    /// Rejects anything `union_roots` must not touch. Nothing is mutated here.
    pub fn check_roots(&self, root1: usize, root2: usize) -> Result<(), DisjointSetError> {
        self.check(root1)?;
        self.check(root2)?;

        for index in [root1, root2] {
            if let Link::Child { .. } = self.slots[index].link() {
                let root = self.walk(index);
                tracing::debug!(index, root, "rejected union of a non-root element");
                return Err(DisjointSetError::InvalidArgument { index, root });
            }
        }

        Ok(())
    }

    #[inline]
    pub fn attach(&mut self, child: usize, parent: usize) {
        self.slots[child] = Slot::child(parent);
    }

    /// `root` has to be a root, otherwise the result is meaningless.
    #[inline]
    fn rank(&self, root: usize) -> usize {
        match self.slots[root].link() {
            Link::Root { rank } => rank,
            Link::Child { .. } => 0,
        }
    }

    /// Union by rank on two distinct roots. Returns the surviving root.
    pub fn union_by_rank(&mut self, root1: usize, root2: usize) -> usize {
        let rank1 = self.rank(root1);
        let rank2 = self.rank(root2);

        if rank1 < rank2 {
            self.attach(root1, root2);
            root2
        } else {
            if rank1 == rank2 {
                self.slots[root1] = Slot::root(rank1 + 1);
            }
            self.attach(root2, root1);
            root1
        }
    }

    /// Points every node on the path from `x` directly at `root`.
    /// Returns how many links were rewritten.
    pub fn compress(&mut self, mut x: usize, root: usize) -> usize {
        let mut rewritten = 0;
        while let Link::Child { parent } = self.slots[x].link() {
            if parent != root {
                self.slots[x] = Slot::child(root);
                rewritten += 1;
            }
            x = parent;
        }
        rewritten
    }
}
