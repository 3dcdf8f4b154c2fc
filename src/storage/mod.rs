//! Value slots: the places an `Optional` keeps its value in
//!
//! A [`StoragePolicy`] names a slot type for every element type. The two policies,
//! [`Local`] and [`Dynamic`], expose the same [`Slot`] capability so the container
//! never needs to know which one backs it.

mod local;

pub use local::{Local, LocalSlot};

cfg_if::cfg_if! {
    if #[cfg(feature = "alloc")] {
        mod dynamic;

        pub use dynamic::{Dynamic, DynamicSlot};
    }
}

/// A storage location that is either empty or holds exactly one `T`
///
/// `construct` must only be called on an empty slot, `destruct` and `take` only on
/// a constructed one. Breaking either rule is a contract failure and panics, leaving
/// the slot unchanged.
///
/// # Safety
/// `address` and `address_mut` must return null while the slot is empty and a pointer
/// to the live, properly aligned value while it is constructed. `is_constructed` must
/// agree with them.
pub unsafe trait Slot<T> {
    /// Creates an empty slot
    fn vacant() -> Self where Self: Sized;

    /// Moves `value` into the slot
    fn construct(&mut self, value: T);

    /// Drops the held value in place, must not panic otherwise
    fn destruct(&mut self);

    /// Moves the held value out, leaving the slot empty
    fn take(&mut self) -> T;

    fn address(&self) -> *const T;

    fn address_mut(&mut self) -> *mut T;

    fn is_constructed(&self) -> bool;

    fn with_value(value: T) -> Self where Self: Sized {
        let mut slot = Self::vacant();
        slot.construct(value);
        slot
    }

    fn get(&self) -> Option<&T> {
        // SAFETY: non-null addresses point to the live value
        unsafe { self.address().as_ref() }
    }

    fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: non-null addresses point to the live value
        unsafe { self.address_mut().as_mut() }
    }
}

/// Selects the slot type an `Optional` stores its value in
pub trait StoragePolicy {
    type Slot<T>: Slot<T>;
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use std::{
        panic::{catch_unwind, AssertUnwindSafe},
        rc::Rc,
        string::String,
        string::ToString,
    };

    use super::*;

    /// Counts live instances through a shared counter
    struct Tracked(Rc<Cell<isize>>);

    impl Tracked {
        fn new(counter: &Rc<Cell<isize>>) -> Self {
            counter.set(counter.get() + 1);
            Tracked(counter.clone())
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    fn state_machine<P: StoragePolicy>() {
        let mut slot = <P::Slot<String> as Slot<String>>::vacant();
        assert!(!slot.is_constructed());
        assert!(slot.address().is_null());
        assert!(slot.get().is_none());

        slot.construct("aa".to_string());
        assert!(slot.is_constructed());
        assert!(!slot.address().is_null());
        assert_eq!(slot.get().map(String::as_str), Some("aa"));

        slot.get_mut().unwrap().push('b');
        assert_eq!(slot.take(), "aab");
        assert!(!slot.is_constructed());
        assert!(slot.address_mut().is_null());

        slot.construct("cc".to_string());
        slot.destruct();
        assert!(!slot.is_constructed());
    }

    fn no_leaks<P: StoragePolicy>() {
        let counter = Rc::new(Cell::new(0));
        {
            let mut slot = <P::Slot<Tracked> as Slot<Tracked>>::with_value(Tracked::new(&counter));
            assert_eq!(counter.get(), 1);
            slot.destruct();
            assert_eq!(counter.get(), 0);

            slot.construct(Tracked::new(&counter));
            let taken = slot.take();
            assert_eq!(counter.get(), 1);
            drop(taken);
            assert_eq!(counter.get(), 0);

            slot.construct(Tracked::new(&counter));
        }
        // dropping a constructed slot drops its value
        assert_eq!(counter.get(), 0);
    }

    fn failed_contract_keeps_state<P: StoragePolicy>() {
        let mut held = <P::Slot<i32> as Slot<i32>>::with_value(1);
        assert!(catch_unwind(AssertUnwindSafe(|| held.construct(2))).is_err());
        assert!(held.is_constructed());
        assert_eq!(held.get(), Some(&1));

        let mut empty = <P::Slot<i32> as Slot<i32>>::vacant();
        assert!(catch_unwind(AssertUnwindSafe(|| empty.destruct())).is_err());
        assert!(!empty.is_constructed());
        assert!(empty.address().is_null());

        assert!(catch_unwind(AssertUnwindSafe(|| empty.take())).is_err());
        assert!(!empty.is_constructed());
        assert_eq!(empty.get(), None);
    }

    #[test]
    fn local_state_machine() {
        state_machine::<Local>();
    }

    #[test]
    fn local_no_leaks() {
        no_leaks::<Local>();
    }

    #[test]
    fn local_failed_contract_keeps_state() {
        failed_contract_keeps_state::<Local>();
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn dynamic_state_machine() {
        state_machine::<Dynamic>();
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn dynamic_no_leaks() {
        no_leaks::<Dynamic>();
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn dynamic_failed_contract_keeps_state() {
        failed_contract_keeps_state::<Dynamic>();
    }
}
