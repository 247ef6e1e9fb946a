use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::BalanceFactor;

/// The core scapegoat tree backing `SGTreeSet`.
#[derive(Clone)]
pub(crate) struct RawSGTree<T> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Total number of values in the tree.
    len: usize,
    /// Weight-balance limit checked after every mutation.
    balance: BalanceFactor,
}

/// One step of a descent: the node visited and the child link followed out of it.
#[derive(Clone, Copy, Debug)]
struct PathElement {
    node: Handle,
    side: Side,
}

/// A descent from the root, deepest step last.
type Path = SmallVec<[PathElement; 32]>;

/// Traversal stack of pending nodes.
pub(crate) type Stack = SmallVec<[Handle; 32]>;

impl<T> RawSGTree<T> {
    /// Creates a new, empty tree.
    pub(crate) const fn new(balance: BalanceFactor) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            balance,
        }
    }

    /// Creates a new, empty tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize, balance: BalanceFactor) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
            balance,
        }
    }

    /// Returns the number of values in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no values.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn balance_factor(&self) -> BalanceFactor {
        self.balance
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    /// Clears all values from the tree.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    fn size_of(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |handle| self.nodes.get(handle).size())
    }

    /// Writes `link` into the slot the last path step points at, or into the root.
    fn attach(&mut self, parent: Option<&PathElement>, link: Option<Handle>) {
        match parent {
            None => self.root = link,
            Some(element) => self.nodes.get_mut(element.node).set_child(element.side, link),
        }
    }

    fn is_balanced(&self, node: &Node<T>) -> bool {
        let size = node.size();
        self.balance.allows(self.size_of(node.left()), size) && self.balance.allows(self.size_of(node.right()), size)
    }

    /// Returns the smallest value in the tree.
    pub(crate) fn first(&self) -> Option<&T> {
        let mut current = self.root?;
        while let Some(left) = self.nodes.get(current).left() {
            current = left;
        }
        Some(self.nodes.get(current).value())
    }

    /// Returns the largest value in the tree.
    pub(crate) fn last(&self) -> Option<&T> {
        let mut current = self.root?;
        while let Some(right) = self.nodes.get(current).right() {
            current = right;
        }
        Some(self.nodes.get(current).value())
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: SmallVec<[(Handle, usize); 32]> = SmallVec::new();
        if let Some(root) = self.root {
            pending.push((root, 1));
        }
        while let Some((handle, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            let node = self.nodes.get(handle);
            pending.extend(node.left().map(|left| (left, depth + 1)));
            pending.extend(node.right().map(|right| (right, depth + 1)));
        }
        deepest
    }

    /// Returns the value at zero-based position `rank` in sorted order.
    pub(crate) fn get_by_rank(&self, mut rank: usize) -> Option<&T> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let left_size = self.size_of(node.left());
            match rank.cmp(&left_size) {
                Less => current = node.left(),
                Equal => return Some(node.value()),
                Greater => {
                    rank -= left_size + 1;
                    current = node.right();
                }
            }
        }
        None
    }

    /// Collects the handles of the subtree rooted at `from`, in sorted order.
    fn in_order(&self, from: Handle) -> Vec<Handle> {
        let mut order = Vec::with_capacity(self.nodes.get(from).size());
        let mut stack: Stack = SmallVec::new();
        let mut current = Some(from);
        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.nodes.get(handle).left();
            }
            let Some(handle) = stack.pop() else {
                break;
            };
            order.push(handle);
            current = self.nodes.get(handle).right();
        }
        order
    }

    /// Re-links the sorted `order` into a minimum-height subtree and returns its root.
    ///
    /// The median of each range becomes the local root, so every child holds at most half of its
    /// parent's values. Recursion depth is logarithmic in `order.len()`.
    fn build_balanced(&mut self, order: &[Handle]) -> Option<Handle> {
        if order.is_empty() {
            return None;
        }
        let mid = order.len() / 2;
        let left = self.build_balanced(&order[..mid]);
        let right = self.build_balanced(&order[mid + 1..]);
        self.nodes.get_mut(order[mid]).relink(left, right, order.len());
        Some(order[mid])
    }

    /// Replaces the subtree rooted at `scapegoat` with a perfectly balanced one built from the
    /// same nodes.
    fn rebuild(&mut self, parent: Option<PathElement>, scapegoat: Handle) {
        let order = self.in_order(scapegoat);
        let rebuilt = self.build_balanced(&order);
        self.attach(parent.as_ref(), rebuilt);
        debug!(subtree_size = order.len(), balance_factor = self.balance.get(), "rebuilt scapegoat subtree");
    }

    /// Promotes `left` over its removed parent whose other child was `right`.
    ///
    /// The right subtree displaced from `left` is hung beneath the minimum of `right`; every node
    /// on `right`'s leftmost path, the minimum included, absorbs its size.
    fn splice_predecessor(&mut self, left: Handle, right: Handle) -> Handle {
        if let Some(displaced) = self.nodes.get(left).right() {
            let extra = self.nodes.get(displaced).size();
            let mut current = right;
            loop {
                let node = self.nodes.get_mut(current);
                node.grow(extra);
                match node.left() {
                    Some(next) => current = next,
                    None => {
                        node.set_left(Some(displaced));
                        break;
                    }
                }
            }
        }

        let size = 1 + self.size_of(self.nodes.get(left).left()) + self.nodes.get(right).size();
        let promoted = self.nodes.get_mut(left);
        promoted.set_right(Some(right));
        promoted.set_size(size);
        left
    }

    /// Moves every value out of the tree in ascending order, leaving it empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<T> {
        debug_assert_eq!(self.nodes.len(), self.len, "arena and tree disagree on the live node count");
        let Some(root) = self.root else {
            return Vec::new();
        };
        let order = self.in_order(root);
        let values: Vec<T> = order.into_iter().map(|handle| self.nodes.take(handle).into_value()).collect();
        self.clear();
        values
    }

    /// Replaces the contents with `sorted`, which must be strictly ascending, as one balanced tree.
    pub(crate) fn rebuild_from_sorted(&mut self, sorted: Vec<T>) {
        self.clear();
        let order: Vec<Handle> = sorted.into_iter().map(|value| self.nodes.alloc(Node::leaf(value))).collect();
        self.root = self.build_balanced(&order);
        self.len = order.len();
    }
}

impl<T: Ord> RawSGTree<T> {
    /// Searches for a value and returns its node handle if found.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match key.cmp(node.value().borrow()) {
                Less => current = node.left(),
                Greater => current = node.right(),
                Equal => return Some(handle),
            }
        }
        None
    }

    /// Returns the stored value equal to `key`.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| self.nodes.get(handle).value())
    }

    /// Returns true if the tree contains `key`.
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Returns the zero-based sorted position of `key`.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut rank = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match key.cmp(node.value().borrow()) {
                Less => current = node.left(),
                Equal => return Some(rank + self.size_of(node.left())),
                Greater => {
                    rank += self.size_of(node.left()) + 1;
                    current = node.right();
                }
            }
        }
        None
    }

    /// Re-descends from the root toward `key` and returns the shallowest node that violates the
    /// balance factor, together with the link it hangs from.
    ///
    /// The walk ends on reaching `key` itself or an empty link.
    fn find_scapegoat<Q>(&self, key: &Q) -> Option<(Option<PathElement>, Handle)>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut parent = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let side = match key.cmp(node.value().borrow()) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => return None,
            };
            if !self.is_balanced(node) {
                return Some((parent, handle));
            }
            parent = Some(PathElement {
                node: handle,
                side,
            });
            current = node.child(side);
        }
        None
    }

    fn rebalance_toward<Q>(&mut self, key: &Q)
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if let Some((parent, scapegoat)) = self.find_scapegoat(key) {
            self.rebuild(parent, scapegoat);
        }
    }

    /// Inserts `value` unless an equal value is already present.
    /// Returns true if the tree changed.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        let mut path: Path = SmallVec::new();
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let side = match value.cmp(node.value()) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => return false,
            };
            path.push(PathElement {
                node: handle,
                side,
            });
            current = node.child(side);
        }

        let leaf = self.nodes.alloc(Node::leaf(value));
        self.attach(path.last(), Some(leaf));
        for element in &path {
            self.nodes.get_mut(element.node).grow(1);
        }
        self.len += 1;

        let scapegoat = self.find_scapegoat(self.nodes.get(leaf).value());
        if let Some((parent, scapegoat)) = scapegoat {
            self.rebuild(parent, scapegoat);
        }
        true
    }

    /// Removes the value equal to `key` and returns it.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut path: Path = SmallVec::new();
        let mut current = self.root;
        let target = loop {
            let handle = current?;
            let node = self.nodes.get(handle);
            let side = match key.cmp(node.value().borrow()) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => break handle,
            };
            path.push(PathElement {
                node: handle,
                side,
            });
            current = node.child(side);
        };

        let removed = self.unlink(&path, target);
        self.rebalance_toward(key);
        Some(removed.into_value())
    }

    /// Removes and returns the smallest (`Side::Left`) or largest (`Side::Right`) value.
    pub(crate) fn remove_extreme(&mut self, side: Side) -> Option<T> {
        let mut path: Path = SmallVec::new();
        let mut target = self.root?;
        while let Some(next) = self.nodes.get(target).child(side) {
            path.push(PathElement {
                node: target,
                side,
            });
            target = next;
        }

        let removed = self.unlink(&path, target);
        self.rebalance_toward(removed.value());
        Some(removed.into_value())
    }

    /// Detaches `target`, the node `path` leads to, and frees its slot. Rebalancing is left to the
    /// caller.
    fn unlink(&mut self, path: &Path, target: Handle) -> Node<T> {
        for element in path {
            self.nodes.get_mut(element.node).shrink(1);
        }

        let removed = self.nodes.take(target);
        let replacement = match (removed.left(), removed.right()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                trace!(depth = path.len(), "splicing in-order predecessor");
                Some(self.splice_predecessor(left, right))
            }
        };
        self.attach(path.last(), replacement);
        self.len -= 1;
        removed
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::fmt::Debug;
    use proptest::prelude::*;

    impl<T: Ord + Debug> RawSGTree<T> {
        /// Validates every structural invariant of the tree, panicking with a description of all
        /// violations found.
        pub(crate) fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();

            let (count, _) = self.validate_node(self.root, None, None, &mut errors);
            if count != self.len {
                errors.push(alloc::format!("len mismatch: self.len={}, actual count={}", self.len, count));
            }
            if self.nodes.len() != self.len {
                errors.push(alloc::format!("arena leak: {} live slots for {} values", self.nodes.len(), self.len));
            }

            assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
        }

        // Returns (subtree_size, subtree_height).
        fn validate_node(
            &self,
            link: Option<Handle>,
            lower: Option<&T>,
            upper: Option<&T>,
            errors: &mut Vec<String>,
        ) -> (usize, usize) {
            let Some(handle) = link else {
                return (0, 0);
            };
            let node = self.nodes.get(handle);
            let value = node.value();

            if lower.is_some_and(|lower| value <= lower) || upper.is_some_and(|upper| value >= upper) {
                errors.push(alloc::format!("Order violation at {value:?}: bounds ({lower:?}, {upper:?})"));
            }

            let (left_size, left_height) = self.validate_node(node.left(), lower, Some(value), errors);
            let (right_size, right_height) = self.validate_node(node.right(), Some(value), upper, errors);
            let size = 1 + left_size + right_size;

            if node.size() != size {
                errors.push(alloc::format!("Size mismatch at {value:?}: stored={}, actual={size}", node.size()));
            }
            if !self.balance.allows(left_size, size) || !self.balance.allows(right_size, size) {
                errors.push(alloc::format!(
                    "Weight balance violated at {value:?}: left={left_size}, right={right_size}, size={size}"
                ));
            }

            (size, 1 + left_height.max(right_height))
        }
    }

    fn tree(factor: f64) -> RawSGTree<i32> {
        RawSGTree::new(BalanceFactor::new(factor).unwrap())
    }

    fn values<T: Clone>(tree: &RawSGTree<T>) -> Vec<T> {
        tree.root.map_or_else(Vec::new, |root| {
            tree.in_order(root).into_iter().map(|handle| tree.node(handle).value().clone()).collect()
        })
    }

    // A weight-balanced tree of n nodes is at most log_{1/a}(n) + 1 nodes deep.
    fn height_bound(len: usize, factor: f64) -> usize {
        let mut levels = 1;
        let mut reach = 1.0;
        while reach < len as f64 {
            reach /= factor;
            levels += 1;
        }
        levels
    }

    fn size_at(tree: &RawSGTree<i32>, value: i32) -> usize {
        tree.node(tree.search(&value).expect("value should be present")).size()
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
        PopFirst,
        PopLast,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0i32..1000).prop_map(Op::Insert),
            4 => (0i32..1000).prop_map(Op::Remove),
            1 => Just(Op::PopFirst),
            1 => Just(Op::PopLast),
        ]
    }

    fn factor_strategy() -> impl Strategy<Value = f64> {
        prop_oneof![Just(0.5), Just(0.6), Just(0.75), Just(0.9), 0.5f64..=1.0]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn tree_invariants_maintained_after_operations(
            factor in factor_strategy(),
            ops in prop::collection::vec(op_strategy(), 0..400),
        ) {
            let mut tree = tree(factor);
            let mut model = alloc::collections::BTreeSet::new();

            for op in ops {
                match op {
                    Op::Insert(value) => prop_assert_eq!(tree.insert(value), model.insert(value)),
                    Op::Remove(value) => prop_assert_eq!(tree.remove(&value), model.take(&value)),
                    Op::PopFirst => prop_assert_eq!(tree.remove_extreme(Side::Left), model.pop_first()),
                    Op::PopLast => prop_assert_eq!(tree.remove_extreme(Side::Right), model.pop_last()),
                }
                tree.validate_invariants();
            }

            prop_assert_eq!(values(&tree), model.into_iter().collect::<Vec<_>>());
        }

        #[test]
        fn get_by_rank_correctness(inserts in prop::collection::vec(0i32..500, 1..200)) {
            let mut tree = tree(0.75);
            for &value in &inserts {
                tree.insert(value);
            }

            let expected = values(&tree);
            for (rank, value) in expected.iter().enumerate() {
                prop_assert_eq!(tree.get_by_rank(rank), Some(value), "get_by_rank({})", rank);
                prop_assert_eq!(tree.rank_of(value), Some(rank), "rank_of({})", value);
            }
            prop_assert!(tree.get_by_rank(expected.len()).is_none());
            prop_assert!(tree.rank_of(&500).is_none());
        }

        #[test]
        fn two_child_removal_keeps_sizes(inserts in prop::collection::vec(0i32..200, 3..120), victim in any::<usize>()) {
            // Factor 1.0 never rebuilds, so the splice itself is what the validator observes.
            let mut tree = tree(1.0);
            for &value in &inserts {
                tree.insert(value);
            }
            let two_child: Vec<i32> = values(&tree)
                .into_iter()
                .filter(|value| {
                    let node = tree.node(tree.search(value).unwrap());
                    node.left().is_some() && node.right().is_some()
                })
                .collect();
            prop_assume!(!two_child.is_empty());
            let victim = two_child[victim % two_child.len()];

            prop_assert_eq!(tree.remove(&victim), Some(victim));
            tree.validate_invariants();
            prop_assert!(!tree.contains(&victim));
        }
    }

    #[test]
    fn empty_tree_operations() {
        let mut tree = tree(0.75);
        tree.validate_invariants();

        assert!(!tree.contains(&1));
        assert_eq!(tree.remove(&1), None);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.get_by_rank(0), None);
        assert_eq!(tree.height(), 0);
        assert!(tree.drain_to_vec().is_empty());
    }

    #[test]
    fn predecessor_splice_relinks_displaced_subtree() {
        let mut tree = tree(1.0);
        for value in [50, 30, 70, 20, 40, 35, 45, 60, 80, 55, 65] {
            assert!(tree.insert(value));
        }

        assert_eq!(tree.remove(&50), Some(50));
        tree.validate_invariants();

        let root = tree.root().unwrap();
        assert_eq!(*tree.node(root).value(), 30);
        assert_eq!(tree.node(root).size(), 10);
        // 40 (with 35 and 45) now hangs beneath 55, the minimum of the old right subtree.
        let min = tree.search(&55).unwrap();
        assert_eq!(tree.node(min).left(), tree.search(&40));
        assert_eq!(size_at(&tree, 55), 4);
        assert_eq!(size_at(&tree, 60), 6);
        assert_eq!(size_at(&tree, 70), 8);
        assert_eq!(values(&tree), vec![20, 30, 35, 40, 45, 55, 60, 65, 70, 80]);
    }

    #[test]
    fn predecessor_splice_when_right_child_is_minimum() {
        let mut tree = tree(1.0);
        for value in [10, 5, 20, 7, 6] {
            tree.insert(value);
        }

        tree.remove(&10);
        tree.validate_invariants();
        assert_eq!(*tree.node(tree.root().unwrap()).value(), 5);
        assert_eq!(tree.node(tree.search(&20).unwrap()).left(), tree.search(&7));
        assert_eq!(size_at(&tree, 20), 3);
    }

    #[test]
    fn remove_extreme_walks_the_spine() {
        let mut tree = tree(1.0);
        for value in [50, 30, 70, 20, 40, 60, 80, 25, 75] {
            tree.insert(value);
        }

        // 20 has a right child, which takes its place.
        assert_eq!(tree.remove_extreme(Side::Left), Some(20));
        assert_eq!(tree.node(tree.search(&30).unwrap()).left(), tree.search(&25));
        assert_eq!(tree.remove_extreme(Side::Right), Some(80));
        assert_eq!(tree.node(tree.search(&70).unwrap()).right(), tree.search(&75));
        tree.validate_invariants();
        assert_eq!(size_at(&tree, 50), 7);

        let mut drained = Vec::new();
        while let Some(value) = tree.remove_extreme(Side::Left) {
            drained.push(value);
            tree.validate_invariants();
        }
        assert_eq!(drained, vec![25, 30, 40, 50, 60, 70, 75]);
        assert_eq!(tree.remove_extreme(Side::Right), None);
    }

    #[test]
    fn remove_extreme_rebalances() {
        let mut tree = tree(0.6);
        for value in 0..512 {
            tree.insert(value);
        }
        for expected in 0..400 {
            assert_eq!(tree.remove_extreme(Side::Left), Some(expected));
            tree.validate_invariants();
        }
        assert!(tree.height() <= height_bound(112, 0.6));
    }

    #[test]
    fn sequential_inserts_trigger_rebuilds() {
        let mut tree = tree(0.75);
        for value in 0..1024 {
            tree.insert(value);
        }
        tree.validate_invariants();

        let bound = height_bound(1024, 0.75);
        assert!(tree.height() <= bound, "height {} exceeds {}", tree.height(), bound);
    }

    #[test]
    fn factor_one_never_rebuilds() {
        let mut tree = tree(1.0);
        for value in 0..200 {
            tree.insert(value);
        }
        tree.validate_invariants();
        assert_eq!(tree.height(), 200);
    }

    #[test]
    fn factor_half_stays_perfectly_weight_balanced() {
        let mut tree = tree(0.5);
        for value in (0..255).rev() {
            tree.insert(value);
            tree.validate_invariants();
        }
        assert_eq!(tree.height(), 8);
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut tree = tree(0.75);
        for value in 0..64 {
            tree.insert(value);
        }
        let capacity = tree.nodes.capacity();
        for round in 0..10 {
            for value in 0..64 {
                tree.remove(&value);
            }
            for value in 0..64 {
                tree.insert(value + round);
            }
        }
        tree.validate_invariants();
        assert_eq!(tree.nodes.capacity(), capacity);
    }

    #[test]
    fn drain_and_rebuild_from_sorted() {
        let mut tree = tree(0.75);
        for value in [4, 2, 9, 1, 7] {
            tree.insert(value);
        }

        let drained = tree.drain_to_vec();
        assert_eq!(drained, vec![1, 2, 4, 7, 9]);
        assert!(tree.is_empty());
        tree.validate_invariants();

        tree.rebuild_from_sorted((0..100).collect());
        tree.validate_invariants();
        assert_eq!(tree.len(), 100);
        assert_eq!(tree.height(), 7);
        assert_eq!(tree.first(), Some(&0));
        assert_eq!(tree.last(), Some(&99));
    }

    #[test]
    fn ranks_stable_after_removals() {
        let mut tree = tree(0.75);
        for value in 0..100 {
            tree.insert(value);
        }
        for value in (0..100).step_by(3) {
            tree.remove(&value);
            tree.validate_invariants();
        }

        let remaining: Vec<i32> = (0..100).filter(|value| value % 3 != 0).collect();
        for (rank, value) in remaining.iter().enumerate() {
            assert_eq!(tree.rank_of(value), Some(rank));
            assert_eq!(tree.get_by_rank(rank), Some(value));
        }
    }
}
