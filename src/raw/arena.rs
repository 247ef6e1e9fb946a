use alloc::vec::Vec;

use super::handle::Handle;

/// Flat node storage addressed by [`Handle`].
///
/// Freed slots are chained into an intrusive free list and recycled by later allocations, so a
/// long-lived set that churns through insertions and removals keeps a stable footprint. Dropping
/// the arena drops a `Vec`, which never recurses no matter how deep the tree stored in it is.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<Handle>,
    len: usize,
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    Vacant {
        next_free: Option<Handle>,
    },
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.free_head {
            let next_free = match &self.slots[handle.index()] {
                Slot::Vacant {
                    next_free,
                } => *next_free,
                Slot::Occupied(_) => panic!("`Arena::alloc()` - free list points at an occupied slot!"),
            };
            self.free_head = next_free;
            self.slots[handle.index()] = Slot::Occupied(element);
            self.len += 1;
            return handle;
        }

        // Slot indices run 0..slots.len(), so the next push is addressable only while
        // slots.len() <= Handle::MAX.
        assert!(self.slots.len() <= Handle::MAX, "`Arena::alloc()` - arena is at maximum capacity ({})", Handle::MAX);
        let handle = Handle::new(self.slots.len());
        self.slots.push(Slot::Occupied(element));
        self.len += 1;
        handle
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant {
                ..
            } => panic!("`Arena::get()` - `handle` is vacant!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant {
                ..
            } => panic!("`Arena::get_mut()` - `handle` is vacant!"),
        }
    }

    /// Moves the element out and threads its slot onto the free list.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        assert!(
            matches!(self.slots[handle.index()], Slot::Occupied(_)),
            "`Arena::take()` - `handle` is vacant!"
        );
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        self.free_head = Some(handle);
        self.len -= 1;
        match core::mem::replace(&mut self.slots[handle.index()], vacant) {
            Slot::Occupied(element) => element,
            Slot::Vacant {
                ..
            } => unreachable!(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn with_capacity_reserves_slots() {
        let arena: Arena<u32> = Arena::with_capacity(10);
        assert!(arena.capacity() >= 10);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn freed_slot_is_recycled_last_in_first_out() {
        let mut arena = Arena::new();
        let a = arena.alloc('a');
        let b = arena.alloc('b');
        let _ = arena.alloc('c');

        assert_eq!(arena.take(a), 'a');
        assert_eq!(arena.take(b), 'b');
        assert_eq!(arena.len(), 1);

        assert_eq!(arena.alloc('d'), b);
        assert_eq!(arena.alloc('e'), a);
        assert_eq!(*arena.get(a), 'e');
        assert_eq!(*arena.get(b), 'd');
        assert_eq!(arena.len(), 3);
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `handle` is vacant!")]
    fn get_after_take_panics() {
        let mut arena = Arena::new();
        let handle = arena.alloc(7u8);
        arena.take(handle);
        let _ = arena.get(handle);
    }

    #[test]
    #[should_panic(expected = "`Arena::alloc()` - arena is at maximum capacity")]
    fn alloc_past_max_panics() {
        let mut arena = Arena::new();
        for _ in 0..=Handle::MAX + 1 {
            arena.alloc(());
        }
    }

    proptest! {
        #[test]
        fn arena_tracks_a_keyed_model(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena: Arena<u32> = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(value) => {
                        let handle = arena.alloc(value);
                        prop_assert!(model.iter().all(|&(live, _)| live != handle), "handle {:?} handed out twice", handle);
                        model.push((handle, value));
                    }
                    Operation::Overwrite(which, value) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        *arena.get_mut(model[index].0) = value;
                        model[index].1 = value;
                    }
                    Operation::Take(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let (handle, expected) = model.swap_remove(index);
                        prop_assert_eq!(arena.take(handle), expected);
                    }
                    Operation::Clear => {
                        arena.clear();
                        model.clear();
                    }
                }

                prop_assert_eq!(arena.len(), model.len());
                for &(handle, value) in &model {
                    prop_assert_eq!(*arena.get(handle), value);
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        Overwrite(usize, u32),
        Take(usize),
        Clear,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Alloc),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::Overwrite(which, value)),
            8 => any::<usize>().prop_map(Operation::Take),
            1 => Just(Operation::Clear),
        ]
    }
}
