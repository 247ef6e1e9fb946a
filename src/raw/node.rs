use super::handle::Handle;

/// Which child link of a node a descent followed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

// Binary search tree vertex. Children are owned exclusively through their arena handles.
#[derive(Clone)]
pub(crate) struct Node<T> {
    value: T,
    // The number of values in the subtree rooted at this node, itself included.
    size: usize,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<T> Node<T> {
    /// Creates a detached leaf holding `value`.
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            size: 1,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) const fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    pub(crate) fn grow(&mut self, by: usize) {
        self.size += by;
    }

    pub(crate) fn shrink(&mut self, by: usize) {
        debug_assert!(self.size > by, "`Node::shrink()` - a node cannot drop itself from its own size!");
        self.size -= by;
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_left(&mut self, child: Option<Handle>) {
        self.left = child;
    }

    pub(crate) fn set_right(&mut self, child: Option<Handle>) {
        self.right = child;
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Re-links this node as the root of a freshly rebuilt subtree.
    pub(crate) fn relink(&mut self, left: Option<Handle>, right: Option<Handle>, size: usize) {
        self.left = left;
        self.right = right;
        self.size = size;
    }
}
