use super::SGTreeSet;
use crate::BalanceFactor;
use crate::raw::RawSGTree;

impl<T> SGTreeSet<T> {
    /// Creates an empty set with node storage for at least `capacity` elements.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API. Slots freed by
    /// removals are recycled before the storage grows again.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let set: SGTreeSet<i32> = SGTreeSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_balance_factor(capacity, BalanceFactor::DEFAULT)
    }

    /// Creates an empty set with room for `capacity` elements that rebuilds according to
    /// `balance`.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::{BalanceFactor, SGTreeSet};
    ///
    /// let factor = BalanceFactor::new(0.6).unwrap();
    /// let set: SGTreeSet<u64> = SGTreeSet::with_capacity_and_balance_factor(8, factor);
    /// assert_eq!(set.balance_factor(), factor);
    /// ```
    #[must_use]
    pub fn with_capacity_and_balance_factor(capacity: usize, balance: BalanceFactor) -> Self {
        SGTreeSet {
            tree: RawSGTree::with_capacity(capacity, balance),
        }
    }

    /// Returns the number of elements the set can hold without reallocating its node storage.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
}
