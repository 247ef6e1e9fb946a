use crate::error::{Error, Result};

/// The weight-balance parameter of a scapegoat tree, validated to lie in `[0.5, 1.0]`.
///
/// A node is balanced while each of its children holds at most `factor * size(node)` values.
/// Lower factors rebuild more eagerly and keep lookups shallow; higher factors tolerate deeper
/// trees in exchange for fewer rebuilds. At `1.0` no rebuild ever fires and the structure
/// degrades to a plain binary search tree.
///
/// # Examples
///
/// ```
/// use sgtree::BalanceFactor;
///
/// let factor = BalanceFactor::new(0.6).unwrap();
/// assert_eq!(factor.get(), 0.6);
/// assert!(BalanceFactor::new(0.3).is_err());
/// assert_eq!(BalanceFactor::default(), BalanceFactor::DEFAULT);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct BalanceFactor(f64);

impl BalanceFactor {
    /// The smallest accepted factor; anything lower could never be satisfied by both children.
    pub const MIN: f64 = 0.5;
    /// The largest accepted factor.
    pub const MAX: f64 = 1.0;
    /// The factor used by [`SGTreeSet::new`](crate::SGTreeSet::new).
    pub const DEFAULT: Self = Self(0.75);

    /// Validates `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `factor` is outside `[0.5, 1.0]` or NaN.
    pub fn new(factor: f64) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&factor) {
            Ok(Self(factor))
        } else {
            Err(Error::InvalidConfiguration {
                balance_factor: factor,
            })
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns `true` if a child holding `child` values may hang below a node of `size` values.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn allows(self, child: usize, size: usize) -> bool {
        child as f64 <= self.0 * size as f64
    }
}

impl Default for BalanceFactor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for BalanceFactor {
    type Error = Error;

    fn try_from(factor: f64) -> Result<Self> {
        Self::new(factor)
    }
}
