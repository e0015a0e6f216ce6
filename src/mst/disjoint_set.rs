use crate::graph::types::NodeId;
use std::cmp::Ordering;

/// Union-find over `0..len` with path halving and union by size
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<NodeId>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Every element starts in its own singleton set
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining
    pub fn components(&self) -> usize {
        self.components
    }

    /// Representative of the set holding `x`
    pub fn find(&mut self, mut x: NodeId) -> NodeId {
        while self.parent[x] != x {
            let next = self.parent[x];
            self.parent[x] = self.parent[next]; // Path halving
            x = next;
        }
        x
    }

    pub fn same_set(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merge the sets holding `a` and `b`.
    ///
    /// Returns the surviving representative, or `None` when both already
    /// share a set. The larger set's root survives; on equal sizes, `a`'s.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> Option<NodeId> {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return None;
        }

        let (root, child) = match self.size[root_a].cmp(&self.size[root_b]) {
            Ordering::Less => (root_b, root_a),
            Ordering::Greater | Ordering::Equal => (root_a, root_b),
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.components -= 1;
        Some(root)
    }

    /// Size of the set holding `x`
    pub fn set_size(&mut self, x: NodeId) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut sets = DisjointSet::new(3);
        assert_eq!(sets.len(), 3);
        assert_eq!(sets.components(), 3);
        for x in 0..3 {
            assert_eq!(sets.find(x), x);
            assert_eq!(sets.set_size(x), 1);
        }
    }

    #[test]
    fn test_union_merges_and_counts() {
        let mut sets = DisjointSet::new(5);
        assert_eq!(sets.union(0, 1), Some(0));
        assert_eq!(sets.union(2, 1), Some(0)); // larger set survives
        assert!(sets.same_set(2, 0));
        assert!(!sets.same_set(3, 0));
        assert_eq!(sets.set_size(1), 3);
        assert_eq!(sets.components(), 3);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut sets = DisjointSet::new(2);
        sets.union(0, 1);
        assert_eq!(sets.union(1, 0), None);
        assert_eq!(sets.components(), 1);
    }

    #[test]
    fn test_long_chain_compresses() {
        let mut sets = DisjointSet::new(64);
        for x in 1..64 {
            sets.union(x, x - 1);
        }
        let root = sets.find(63);
        assert!((0..64).all(|x| sets.find(x) == root));
        assert_eq!(sets.set_size(0), 64);
        assert_eq!(sets.components(), 1);
    }

    #[test]
    fn test_empty() {
        let sets = DisjointSet::new(0);
        assert!(sets.is_empty());
        assert_eq!(sets.components(), 0);
    }
}
