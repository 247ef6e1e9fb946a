//! Scapegoat-tree ordered set for Rust.
//!
//! This crate provides [`SGTreeSet`], an ordered set with the familiar `BTreeSet` surface,
//! backed by a weight-balanced binary search tree that rebalances by partial rebuilding:
//!
//! - [`insert`](SGTreeSet::insert) / [`remove`](SGTreeSet::remove) report whether the set
//!   changed; duplicates and missing values are ordinary `false` outcomes
//! - [`BalanceFactor`] trades rebuild frequency against lookup depth
//! - [`get_by_rank`](SGTreeSet::get_by_rank) and [`rank_of`](SGTreeSet::rank_of) come for free
//!   from the subtree sizes the tree keeps anyway
//!
//! # Example
//!
//! ```
//! use sgtree::{Rank, SGTreeSet};
//!
//! let mut set = SGTreeSet::with_balance_factor(0.75).unwrap();
//! for value in [5, 3, 8, 1, 4, 7, 9] {
//!     set.insert(value);
//! }
//!
//! assert_eq!(set.values(), [1, 3, 4, 5, 7, 8, 9]);
//! assert!(!set.insert(4));
//!
//! assert!(set.remove(&5));
//! assert_eq!(set[Rank(3)], 7);
//! assert_eq!(set.rank_of(&8), Some(4));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **O(log n) amortized updates** - A lopsided subtree is rebuilt into perfect balance once
//!   it outgrows the balance factor
//! - **Flat storage** - Nodes live in an index arena with slot recycling, so dropping even a
//!   degenerate tree never recurses
//!
//! # Implementation
//!
//! After each insertion or removal the tree re-descends from the root toward the touched value
//! and rebuilds the shallowest node (the *scapegoat*) with a child heavier than
//! `balance_factor * size(node)`. The rebuild reuses the subtree's own nodes, re-linked around
//! the median of their sorted order.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod balance_factor;
mod error;
mod order_statistic;
mod raw;

pub mod sgtree_set;

pub use balance_factor::BalanceFactor;
pub use error::{Error, Result};
pub use order_statistic::Rank;
pub use sgtree_set::SGTreeSet;
