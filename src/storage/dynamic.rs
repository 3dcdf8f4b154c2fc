use alloc::boxed::Box;
use core::fmt::Debug;

use log::trace;
use static_assertions::const_assert_eq;

use crate::common::macros::{assert_state, contract_failure};

use super::{Slot, StoragePolicy};

/// Keeps the value in its own heap allocation, the optional only holds the handle
#[derive(Clone, Copy, Debug)]
pub enum Dynamic {}

impl StoragePolicy for Dynamic {
    type Slot<T> = DynamicSlot<T>;
}

/// Hosts a `T` in a separately owned allocation
///
/// One allocation is made per `construct` and released by the matching
/// `destruct`, `take` or drop. The slot itself is one pointer wide for any `T`.
pub struct DynamicSlot<T> {
    data: Option<Box<T>>,
}

const_assert_eq!(core::mem::size_of::<DynamicSlot<u8>>(), core::mem::size_of::<usize>());
const_assert_eq!(core::mem::size_of::<DynamicSlot<[u64; 512]>>(), core::mem::size_of::<usize>());

impl<T> DynamicSlot<T> {
    pub const fn new() -> Self {
        Self { data: None }
    }
}

unsafe impl<T> Slot<T> for DynamicSlot<T> {
    fn vacant() -> Self {
        Self::new()
    }

    fn construct(&mut self, value: T) {
        assert_state!(self.data.is_none(), "slot already holds a value");
        let data = Box::new(value);
        trace!("allocated {} at {:p}", core::any::type_name::<T>(), data);
        self.data = Some(data);
    }

    fn destruct(&mut self) {
        assert_state!(self.data.is_some(), "slot holds no value");
        if let Some(data) = self.data.take() {
            trace!("releasing {} at {:p}", core::any::type_name::<T>(), data);
            drop(data);
        }
    }

    fn take(&mut self) -> T {
        match self.data.take() {
            Some(data) => {
                trace!("moving {} out of {:p}", core::any::type_name::<T>(), data);
                *data
            }
            None => contract_failure!("slot holds no value"),
        }
    }

    fn address(&self) -> *const T {
        match &self.data {
            Some(data) => &**data,
            None => core::ptr::null(),
        }
    }

    fn address_mut(&mut self) -> *mut T {
        match &mut self.data {
            Some(data) => &mut **data,
            None => core::ptr::null_mut(),
        }
    }

    fn is_constructed(&self) -> bool {
        self.data.is_some()
    }
}

impl<T> Default for DynamicSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicSlot<T> {
    fn drop(&mut self) {
        if self.data.is_some() {
            self.destruct();
        }
    }
}

impl<T: Debug> Debug for DynamicSlot<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("DynamicSlot").field(&self.get()).finish()
    }
}
