//! Disjoint-set forest over dense `u32` element indices.
//!
//! Components are tracked by representative (root) index. Auxiliary
//! per-component data such as sizes or internal differences is kept by the
//! caller in sibling arrays indexed by root; `union` returns the surviving
//! root so a single write keeps such arrays current.

/// Union–find with path halving and union-by-rank.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Create `n` singleton sets, element `i` its own representative.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements (not components).
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`, compressing the path by
    /// halving as it walks. `x` must be in range.
    #[inline]
    pub fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merge the sets containing `a` and `b` and return the surviving root.
    ///
    /// The shallower tree attaches under the deeper; on a rank tie the root
    /// of `a` wins and its rank increments. A no-op returning the shared
    /// root when `a` and `b` are already in the same set.
    pub fn union(&mut self, a: u32, b: u32) -> u32 {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return ra;
        }
        let (ra_rank, rb_rank) = (self.rank[ra as usize], self.rank[rb as usize]);
        if ra_rank < rb_rank {
            self.parent[ra as usize] = rb;
            rb
        } else {
            self.parent[rb as usize] = ra;
            if ra_rank == rb_rank {
                self.rank[ra as usize] += 1;
            }
            ra
        }
    }

    /// Point every element directly at its root and return the parent array.
    ///
    /// The result is the canonical label map: `out[i]` is the root element
    /// index of `i`'s component, and `out[out[i]] == out[i]`.
    pub fn flatten(&mut self) -> Vec<u32> {
        for i in 0..self.parent.len() as u32 {
            let root = self.find(i);
            self.parent[i as usize] = root;
        }
        self.parent.clone()
    }
}
