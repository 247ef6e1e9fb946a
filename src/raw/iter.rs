use smallvec::SmallVec;

use super::handle::Handle;
use super::raw_sgtree::{RawSGTree, Stack};

/// Borrowing in-order cursor over a [`RawSGTree`], walkable from both ends.
///
/// Each end keeps its own spine stack; `remaining` stops the two walks before they cross.
pub(crate) struct RawIter<'a, T> {
    tree: &'a RawSGTree<T>,
    front: Stack,
    back: Stack,
    remaining: usize,
}

impl<'a, T> RawIter<'a, T> {
    pub(crate) fn new(tree: &'a RawSGTree<T>) -> Self {
        let mut iter = Self {
            tree,
            front: SmallVec::new(),
            back: SmallVec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root());
        iter.push_right_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<Handle>) {
        while let Some(handle) = link {
            self.front.push(handle);
            link = self.tree.node(handle).left();
        }
    }

    fn push_right_spine(&mut self, mut link: Option<Handle>) {
        while let Some(handle) = link {
            self.back.push(handle);
            link = self.tree.node(handle).right();
        }
    }

    pub(crate) const fn remaining(&self) -> usize {
        self.remaining
    }

    pub(crate) fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front.pop()?;
        let tree = self.tree;
        let node = tree.node(handle);
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    pub(crate) fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back.pop()?;
        let tree = self.tree;
        let node = tree.node(handle);
        self.push_right_spine(node.left());
        self.remaining -= 1;
        Some(node.value())
    }
}

impl<T> Clone for RawIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}
