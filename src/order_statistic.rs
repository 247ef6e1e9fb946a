/// A zero-based rank into the sorted order of a set.
///
/// This is an order-statistic extension and is not part of the standard
/// `BTreeSet` API.
///
/// # Examples
///
/// ```
/// use sgtree::{Rank, SGTreeSet};
///
/// let set = SGTreeSet::from(["b", "a"]);
/// assert_eq!(set[Rank(0)], "a");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
