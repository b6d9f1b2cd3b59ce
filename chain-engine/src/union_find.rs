//! Persistent union-find over word positions.
//!
//! Every search path in the braid-cover search owns one [`PersistentUnionFind`]
//! value. Unions never mutate: they return a new value that shares all
//! untouched structure with its predecessor, so sibling branches of the search
//! can fork from the same state without seeing each other's merges.
//!
//! The parent pointers live in a path-copying balanced binary tree. Reading is
//! `O(log n)`, writing copies one root-to-leaf path, and forking is a pointer
//! clone.

use std::sync::Arc;

#[derive(Debug)]
enum Node {
    Leaf(usize),
    Branch(Arc<Node>, Arc<Node>),
}

fn build(lo: usize, hi: usize) -> Arc<Node> {
    if hi - lo == 1 {
        return Arc::new(Node::Leaf(lo));
    }
    let mid = lo + (hi - lo) / 2;
    Arc::new(Node::Branch(build(lo, mid), build(mid, hi)))
}

fn get(node: &Node, lo: usize, hi: usize, index: usize) -> usize {
    match node {
        Node::Leaf(value) => *value,
        Node::Branch(left, right) => {
            let mid = lo + (hi - lo) / 2;
            if index < mid {
                get(left, lo, mid, index)
            } else {
                get(right, mid, hi, index)
            }
        }
    }
}

fn set(node: &Arc<Node>, lo: usize, hi: usize, index: usize, value: usize) -> Arc<Node> {
    match node.as_ref() {
        Node::Leaf(_) => Arc::new(Node::Leaf(value)),
        Node::Branch(left, right) => {
            let mid = lo + (hi - lo) / 2;
            if index < mid {
                Arc::new(Node::Branch(set(left, lo, mid, index, value), Arc::clone(right)))
            } else {
                Arc::new(Node::Branch(Arc::clone(left), set(right, mid, hi, index, value)))
            }
        }
    }
}

/// An immutable disjoint-set structure over positions `0..len`.
///
/// Cloning is cheap and yields an independent value; see the module docs.
#[derive(Debug, Clone)]
pub struct PersistentUnionFind {
    len: usize,
    root: Option<Arc<Node>>,
}

impl PersistentUnionFind {
    /// Creates the identity state: every position is its own representative.
    pub fn new(len: usize) -> Self {
        let root = if len == 0 { None } else { Some(build(0, len)) };
        PersistentUnionFind { len, root }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn parent(&self, x: usize) -> usize {
        match &self.root {
            Some(root) => get(root, 0, self.len, x),
            None => unreachable!("lookup in an empty union-find"),
        }
    }

    fn with_parent(&self, x: usize, parent: usize) -> Self {
        match &self.root {
            Some(root) => PersistentUnionFind {
                len: self.len,
                root: Some(set(root, 0, self.len, x, parent)),
            },
            None => unreachable!("update in an empty union-find"),
        }
    }

    fn check(&self, x: usize) {
        assert!(
            x < self.len,
            "position {} out of range for union-find of length {}",
            x,
            self.len
        );
    }

    /// Returns the canonical representative of `x`.
    ///
    /// # Panics
    /// Panics if `x >= len`.
    pub fn find(&self, x: usize) -> usize {
        self.check(x);
        let mut current = x;
        loop {
            let parent = self.parent(current);
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    /// Returns the representative of `x` together with a state in which every
    /// position on the path from `x` points straight at it.
    ///
    /// The receiver stays valid and unchanged. Callers thread the returned
    /// state forward on their own path.
    pub fn find_compressed(&self, x: usize) -> (usize, Self) {
        let root = self.find(x);
        let mut state = self.clone();
        let mut current = x;
        while current != root {
            let parent = state.parent(current);
            if parent != root {
                state = state.with_parent(current, root);
            }
            current = parent;
        }
        (root, state)
    }

    /// Returns a state in which `x` and `y` share a representative.
    ///
    /// The larger representative is re-parented under the smaller one. If the
    /// two positions are already equivalent the result is equivalent to `self`.
    pub fn union(&self, x: usize, y: usize) -> Self {
        let (rx, state) = self.find_compressed(x);
        let (ry, state) = state.find_compressed(y);
        if rx == ry {
            return state;
        }
        let (small, large) = if rx < ry { (rx, ry) } else { (ry, rx) };
        state.with_parent(large, small)
    }

    /// Returns true if `x` and `y` share a representative.
    pub fn equal(&self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of distinct equivalence classes.
    pub fn class_count(&self) -> usize {
        (0..self.len).filter(|&x| self.parent(x) == x).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identity_state() {
        let uf = PersistentUnionFind::new(5);
        for x in 0..5 {
            assert_eq!(uf.find(x), x);
        }
        assert_eq!(uf.class_count(), 5);
    }

    #[test]
    fn test_union_uses_smaller_representative() {
        let uf = PersistentUnionFind::new(6).union(4, 2).union(5, 4);
        assert_eq!(uf.find(5), 2);
        assert_eq!(uf.find(4), 2);
        assert!(uf.equal(2, 5));
        assert_eq!(uf.class_count(), 4);
    }

    #[test]
    fn test_union_of_equivalent_positions_is_noop() {
        let uf = PersistentUnionFind::new(4).union(0, 1);
        let again = uf.union(1, 0);
        assert_eq!(again.class_count(), uf.class_count());
        assert!(again.equal(0, 1));
    }

    #[test]
    fn test_forks_are_independent() {
        let base = PersistentUnionFind::new(5).union(0, 1);
        let left = base.union(1, 2);
        let right = base.union(3, 4);

        assert!(left.equal(0, 2));
        assert!(!left.equal(3, 4));
        assert!(right.equal(3, 4));
        assert!(!right.equal(0, 2));
        // The shared predecessor sees neither branch
        assert!(!base.equal(0, 2));
        assert!(!base.equal(3, 4));
    }

    #[test]
    fn test_find_compressed_keeps_answers() {
        let uf = PersistentUnionFind::new(8)
            .union(6, 7)
            .union(5, 6)
            .union(4, 5)
            .union(3, 4);
        let (root, compressed) = uf.find_compressed(7);
        assert_eq!(root, 3);
        for x in 3..8 {
            assert_eq!(compressed.find(x), 3);
            assert_eq!(uf.find(x), 3);
        }
    }

    #[test]
    fn test_single_position() {
        let uf = PersistentUnionFind::new(1);
        assert!(uf.equal(0, 0));
        assert_eq!(uf.class_count(), 1);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        PersistentUnionFind::new(3).find(3);
    }

    fn unions(len: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
        proptest::collection::vec((0..len, 0..len), 0..12)
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            .. ProptestConfig::default()
        })]

        #[test]
        fn equivalence_laws_hold(pairs in unions(10)) {
            let uf = pairs
                .iter()
                .fold(PersistentUnionFind::new(10), |uf, &(x, y)| uf.union(x, y));
            for x in 0..10 {
                prop_assert!(uf.equal(x, x));
                for y in 0..10 {
                    prop_assert_eq!(uf.equal(x, y), uf.equal(y, x));
                    for z in 0..10 {
                        if uf.equal(x, y) && uf.equal(y, z) {
                            prop_assert!(uf.equal(x, z));
                        }
                    }
                }
            }
            for &(x, y) in &pairs {
                prop_assert!(uf.equal(x, y));
            }
        }

        #[test]
        fn union_leaves_unrelated_pairs_alone(pairs in unions(10), x in 0usize..10, y in 0usize..10) {
            let before = pairs
                .iter()
                .fold(PersistentUnionFind::new(10), |uf, &(a, b)| uf.union(a, b));
            let after = before.union(x, y);
            prop_assert!(after.equal(x, y));
            for a in 0..10 {
                for b in 0..10 {
                    let touched = before.equal(a, x)
                        || before.equal(a, y)
                        || before.equal(b, x)
                        || before.equal(b, y);
                    if !touched {
                        prop_assert_eq!(after.equal(a, b), before.equal(a, b));
                    }
                }
            }
        }

        #[test]
        fn matches_a_naive_partition(pairs in unions(8)) {
            let mut labels: Vec<usize> = (0..8).collect();
            let mut uf = PersistentUnionFind::new(8);
            for &(x, y) in &pairs {
                uf = uf.union(x, y);
                let (from, to) = (labels[x], labels[y]);
                for label in labels.iter_mut() {
                    if *label == from {
                        *label = to;
                    }
                }
            }
            for a in 0..8 {
                for b in 0..8 {
                    prop_assert_eq!(uf.equal(a, b), labels[a] == labels[b]);
                }
            }
        }
    }
}
