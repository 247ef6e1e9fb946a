mod arena;
mod handle;
mod iter;
mod node;
mod raw_sgtree;

pub(crate) use iter::RawIter;
pub(crate) use node::Side;
pub(crate) use raw_sgtree::RawSGTree;
