use core::fmt::Debug;

use static_assertions::assert_impl_all;

use crate::common::{macros::assert_state, mem::AlignedStorage};

use super::{Slot, StoragePolicy};

/// Keeps the value inline, inside the optional's own footprint
#[derive(Clone, Copy, Debug)]
pub enum Local {}

impl StoragePolicy for Local {
    type Slot<T> = LocalSlot<T>;
}

/// Hosts a `T` inside an `AlignedStorage` region embedded in the slot
///
/// The footprint is the size of `T` plus the state flag, whether or not a value is held.
pub struct LocalSlot<T> {
    storage: AlignedStorage<T>,
    constructed: bool,
}

assert_impl_all!(LocalSlot<u64>: Send, Sync);

impl<T> LocalSlot<T> {
    pub const fn new() -> Self {
        Self {
            storage: AlignedStorage::new(),
            constructed: false,
        }
    }
}

unsafe impl<T> Slot<T> for LocalSlot<T> {
    fn vacant() -> Self {
        Self::new()
    }

    fn construct(&mut self, value: T) {
        assert_state!(!self.constructed, "slot already holds a value");
        // SAFETY: the region is sized and aligned for T and holds no live value
        unsafe {
            self.storage.as_mut_ptr().write(value);
        }
        self.constructed = true;
    }

    fn destruct(&mut self) {
        assert_state!(self.constructed, "slot holds no value");
        // cleared first so a panicking destructor can't cause a second drop
        self.constructed = false;
        // SAFETY: the region held a live T until the flag was cleared
        unsafe {
            self.storage.as_mut_ptr().drop_in_place();
        }
    }

    fn take(&mut self) -> T {
        assert_state!(self.constructed, "slot holds no value");
        self.constructed = false;
        // SAFETY: the value is live and the slot no longer considers itself its owner
        unsafe { self.storage.as_ptr().read() }
    }

    fn address(&self) -> *const T {
        if self.constructed {
            self.storage.as_ptr()
        } else {
            core::ptr::null()
        }
    }

    fn address_mut(&mut self) -> *mut T {
        if self.constructed {
            self.storage.as_mut_ptr()
        } else {
            core::ptr::null_mut()
        }
    }

    fn is_constructed(&self) -> bool {
        self.constructed
    }
}

impl<T> Default for LocalSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LocalSlot<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("LocalSlot").field(&self.get()).finish()
    }
}

impl<T> Drop for LocalSlot<T> {
    fn drop(&mut self) {
        if self.constructed {
            self.destruct();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{format, vec, vec::Vec};

    use super::*;

    #[test]
    fn value_lives_in_the_region() {
        let mut slot = LocalSlot::<u32>::with_value(7);
        let region = slot.storage.address();
        assert_eq!(slot.address().cast::<u8>(), region);
        assert_eq!(slot.address_mut().cast::<u8>() as *const u8, region);
    }

    #[test]
    fn footprint_is_inline() {
        assert!(core::mem::size_of::<LocalSlot<[u64; 16]>>() >= core::mem::size_of::<[u64; 16]>());
        assert_eq!(core::mem::align_of::<LocalSlot<u128>>(), core::mem::align_of::<u128>());
    }

    #[test]
    fn holds_heap_owning_values() {
        let mut slot = LocalSlot::<Vec<i32>>::vacant();
        slot.construct(vec![1, 2, 3]);
        slot.get_mut().unwrap().push(4);
        let taken = slot.take();
        assert_eq!(taken, [1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "slot already holds a value")]
    fn construct_twice_fails() {
        let mut slot = LocalSlot::<i32>::with_value(1);
        slot.construct(2);
    }

    #[test]
    #[should_panic(expected = "slot holds no value")]
    fn destruct_empty_fails() {
        let mut slot = LocalSlot::<i32>::new();
        slot.destruct();
    }

    #[test]
    #[should_panic(expected = "slot holds no value")]
    fn take_empty_fails() {
        let mut slot = LocalSlot::<i32>::new();
        let _ = slot.take();
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", LocalSlot::<i32>::with_value(5)), "LocalSlot(Some(5))");
        assert_eq!(format!("{:?}", LocalSlot::<i32>::new()), "LocalSlot(None)");
    }
}
