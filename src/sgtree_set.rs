use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::BalanceFactor;
use crate::error::Result;
use crate::raw::{RawIter, RawSGTree, Side};

mod capacity;
mod order_statistic;

/// An ordered set based on a scapegoat tree.
///
/// A scapegoat tree is a binary search tree that stores nothing per node beyond the size of the
/// node's subtree. Instead of rotating on every update, it waits until some subtree grows
/// lopsided relative to the configured [`BalanceFactor`] and then rebuilds that one subtree
/// (the *scapegoat*) into perfect balance. Lookups are O(log n) worst case; insertions and
/// removals are O(log n) amortized, with an occasional O(n) rebuild.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the [`Ord`] trait, changes while it is in the set. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `SGTreeSet` that observed the logic error and not result in undefined behavior.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use sgtree::SGTreeSet;
///
/// let mut set = SGTreeSet::new();
/// for value in [5, 3, 8, 1, 4, 7, 9] {
///     set.insert(value);
/// }
///
/// assert_eq!(set.values(), [1, 3, 4, 5, 7, 8, 9]);
/// assert!(set.contains(&4));
/// assert!(!set.contains(&6));
///
/// assert!(set.remove(&5));
/// assert_eq!(set.values(), [1, 3, 4, 7, 8, 9]);
/// assert!(!set.remove(&5));
/// ```
///
/// A set with a custom balance factor:
///
/// ```
/// use sgtree::{Error, SGTreeSet};
///
/// let mut eager = SGTreeSet::with_balance_factor(0.55)?;
/// eager.extend(0..1000);
/// assert!(eager.height() <= 14);
///
/// assert!(SGTreeSet::<i32>::with_balance_factor(1.5).is_err());
/// # Ok::<(), Error>(())
/// ```
pub struct SGTreeSet<T> {
    tree: RawSGTree<T>,
}

/// An iterator over the items of a `SGTreeSet`.
///
/// This `struct` is created by the [`iter`] method on [`SGTreeSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use sgtree::SGTreeSet;
///
/// let set = SGTreeSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: SGTreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: RawIter<'a, T>,
}

/// An owning iterator over the items of a `SGTreeSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`SGTreeSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: SGTreeSet#method.into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> SGTreeSet<T> {
    /// Makes a new, empty `SGTreeSet` with the default balance factor of `0.75`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::{BalanceFactor, SGTreeSet};
    ///
    /// let mut set = SGTreeSet::new();
    /// set.insert(1);
    /// assert_eq!(set.balance_factor(), BalanceFactor::DEFAULT);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> SGTreeSet<T> {
        SGTreeSet::with_config(BalanceFactor::DEFAULT)
    }

    /// Makes a new, empty `SGTreeSet` that rebuilds according to `balance`.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    #[must_use]
    pub const fn with_config(balance: BalanceFactor) -> SGTreeSet<T> {
        SGTreeSet {
            tree: RawSGTree::new(balance),
        }
    }

    /// Makes a new, empty `SGTreeSet` with the given balance factor.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration) if
    /// `balance_factor` lies outside `[0.5, 1.0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::{Error, SGTreeSet};
    ///
    /// assert!(SGTreeSet::<u8>::with_balance_factor(0.5).is_ok());
    /// assert!(SGTreeSet::<u8>::with_balance_factor(1.0).is_ok());
    /// assert_eq!(
    ///     SGTreeSet::<u8>::with_balance_factor(0.3).err(),
    ///     Some(Error::InvalidConfiguration { balance_factor: 0.3 }),
    /// );
    /// ```
    pub fn with_balance_factor(balance_factor: f64) -> Result<SGTreeSet<T>> {
        BalanceFactor::new(balance_factor).map(SGTreeSet::with_config)
    }

    /// Returns the balance factor this set was built with.
    #[must_use]
    pub const fn balance_factor(&self) -> BalanceFactor {
        self.tree.balance_factor()
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let mut v = SGTreeSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the first element in the set, if any.
    /// This is the minimum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let mut set = SGTreeSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the last element in the set, if any.
    /// This is the maximum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let mut set = SGTreeSet::new();
    /// assert_eq!(set.last(), None);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.last(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Retains only the elements specified by the predicate. If anything was removed, the
    /// survivors are rebuilt into a single perfectly balanced tree.
    ///
    /// The predicate visits every element before the set is modified, so if `f` panics the set
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let mut set: SGTreeSet<i32> = (0..8).collect();
    /// set.retain(|&k| k % 2 == 0);
    /// assert_eq!(set.values(), [0, 2, 4, 6]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let keep: Vec<bool> = self.iter().map(&mut f).collect();
        if keep.iter().all(|&kept| kept) {
            return;
        }
        let kept: Vec<T> = self
            .tree
            .drain_to_vec()
            .into_iter()
            .zip(keep)
            .filter_map(|(value, kept)| kept.then_some(value))
            .collect();
        self.tree.rebuild_from_sorted(kept);
    }

    /// Number of nodes on the longest root-to-leaf path; `0` for an empty set.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API. For any set built
    /// with factor `a`, the height never exceeds `log(len) / log(1 / a) + 1` (for `a < 1.0`).
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let set: SGTreeSet<u32> = (0..1023).collect();
    /// assert!(set.height() <= 25);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Gets an iterator that visits the elements in the `SGTreeSet` in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let set = SGTreeSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; O(1) amortized per step.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: RawIter::new(&self.tree),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let mut a = SGTreeSet::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1);
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let mut a = SGTreeSet::new();
    /// assert!(a.is_empty());
    /// a.insert(1);
    /// assert!(!a.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl<T: Ord> SGTreeSet<T> {
    /// Returns `true` if the set contains a value.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let set = SGTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.contains(value)
    }

    /// Returns a reference to the value in the set, if any, that is equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let set = SGTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.get(value)
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is
    ///   returned.
    /// - If the set already contained an equal value, `false` is returned, and
    ///   the set is left untouched.
    ///
    /// After linking the new leaf, the path from the root toward it is re-walked; the shallowest
    /// node holding a child heavier than the balance factor allows is rebuilt into perfect
    /// balance.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let mut set = SGTreeSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) amortized; O(n) when a rebuild fires.
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value)
    }

    /// If the set contains an element equal to the value, removes it from the
    /// set and drops it. Returns whether such an element was present.
    ///
    /// A node with two children is replaced by its left child; the left child's former right
    /// subtree moves beneath the minimum of the removed node's right subtree. The touched path
    /// is then checked for a scapegoat exactly as after an insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let mut set = SGTreeSet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) amortized; O(n) when a rebuild fires.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.remove(value).is_some()
    }

    /// Removes and returns the value in the set, if any, that is equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let mut set = SGTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) amortized
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.remove(value)
    }

    /// Removes and returns the first element in the set.
    /// The first element is the minimum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let mut set = SGTreeSet::from([1, 2]);
    /// while let Some(n) = set.pop_first() {
    ///     assert!(set.iter().all(|&k| k > n));
    /// }
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) amortized
    pub fn pop_first(&mut self) -> Option<T> {
        self.tree.remove_extreme(Side::Left)
    }

    /// Removes and returns the last element in the set.
    /// The last element is the maximum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let mut set = SGTreeSet::from([1, 2]);
    /// while let Some(n) = set.pop_last() {
    ///     assert!(set.iter().all(|&k| k < n));
    /// }
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) amortized
    pub fn pop_last(&mut self) -> Option<T> {
        self.tree.remove_extreme(Side::Right)
    }

    /// Returns every element in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let set = SGTreeSet::from([9, 4, 7]);
    /// assert_eq!(set.values(), vec![4, 7, 9]);
    /// assert!(SGTreeSet::<i32>::new().values().is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for SGTreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: PartialEq> PartialEq for SGTreeSet<T> {
    fn eq(&self, other: &SGTreeSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SGTreeSet<T> {}

impl<T: Clone> Clone for SGTreeSet<T> {
    fn clone(&self) -> Self {
        SGTreeSet {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SGTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for SGTreeSet<T> {
    fn default() -> Self {
        SGTreeSet::new()
    }
}

impl<T: Ord> FromIterator<T> for SGTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        // Stable sort, so the first of several equal values survives, as with repeated `insert`.
        values.sort();
        values.dedup();

        let mut set = SGTreeSet::new();
        set.tree.rebuild_from_sorted(values);
        set
    }
}

impl<T: Ord> Extend<T> for SGTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for SGTreeSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SGTreeSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for SGTreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `SGTreeSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::SGTreeSet;
    ///
    /// let set = SGTreeSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.tree.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SGTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.remaining();
        (remaining, Some(remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }

    fn min(mut self) -> Option<&'a T>
    where
        &'a T: Ord,
    {
        self.next()
    }

    fn max(mut self) -> Option<&'a T>
    where
        &'a T: Ord,
    {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.remaining()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let remaining: Vec<&T> = self.clone().collect();
        f.debug_tuple("Iter").field(&remaining).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `sgtree_set::IntoIter`.
    ///
    /// ```
    /// # use sgtree::sgtree_set;
    /// let iter: sgtree_set::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}
