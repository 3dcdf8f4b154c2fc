//! The optional container
//!
//! `Optional<T, P>` is either empty or engaged with one `T`. It tracks no state of its
//! own: engagement is exactly whether its slot is constructed, so the two can't diverge.
//!
//! Two access levels are offered. Dereferencing (`*opt`, `opt.method()`) is the
//! unchecked path and treats an empty optional as a caller bug, panicking like a null
//! dereference. `value()` is the checked path and reports `BadOptionalAccess` instead.

use core::{
    fmt::Debug,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

use crate::{
    common::macros::contract_failure,
    error::BadOptionalAccess,
    storage::{Local, Slot, StoragePolicy},
};

mod cmp;

/// Stateless marker for the empty state, usable without naming the element type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nullopt;

pub const NULLOPT: Nullopt = Nullopt;

pub struct Optional<T, P: StoragePolicy = Local> {
    slot: P::Slot<T>,
}

impl<T, P: StoragePolicy> Optional<T, P> {
    /// Creates an empty optional
    pub fn new() -> Self {
        Self { slot: <P::Slot<T> as Slot<T>>::vacant() }
    }

    /// Creates an engaged optional holding `value`
    pub fn some(value: T) -> Self {
        Self { slot: <P::Slot<T> as Slot<T>>::with_value(value) }
    }

    /// Copies the state of `other`, converting its value into `T` \
    /// `other` may use a different storage policy
    pub fn from_optional<U, Q>(other: &Optional<U, Q>) -> Self
    where
        U: Clone,
        T: From<U>,
        Q: StoragePolicy,
    {
        match other.get() {
            Some(value) => Self::some(T::from(value.clone())),
            None => Self::new(),
        }
    }

    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }

    pub fn has_value(&self) -> bool {
        self.slot.is_constructed()
    }

    /// Drops the held value, if any
    pub fn reset(&mut self) {
        if self.has_value() {
            self.slot.destruct();
        }
    }

    pub fn assign_nullopt(&mut self, _: Nullopt) -> &mut Self {
        self.reset();
        self
    }

    /// Engages the optional with `value` \
    /// An engaged optional is assigned in place rather than destroyed and rebuilt
    pub fn set<U>(&mut self, value: U) -> &mut T
    where
        T: From<U>,
    {
        let value = T::from(value);
        if self.has_value() {
            *self.held_mut() = value;
        } else {
            self.slot.construct(value);
        }
        self.held_mut()
    }

    /// Makes `self` mirror `other`, converting its value into `T`
    ///
    /// | self \ other | engaged          | empty  |
    /// |--------------|------------------|--------|
    /// | engaged      | assign in place  | reset  |
    /// | empty        | construct a copy | no-op  |
    pub fn assign<U, Q>(&mut self, other: &Optional<U, Q>) -> &mut Self
    where
        U: Clone,
        T: From<U>,
        Q: StoragePolicy,
    {
        match other.get() {
            Some(value) => {
                self.set(value.clone());
            }
            None => self.reset(),
        }
        self
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.slot.get_mut()
    }

    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.get().ok_or(BadOptionalAccess)
    }

    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.get_mut().ok_or(BadOptionalAccess)
    }

    pub fn value_or<U>(&self, fallback: U) -> T
    where
        T: Clone + From<U>,
    {
        match self.get() {
            Some(value) => value.clone(),
            None => T::from(fallback),
        }
    }

    pub fn value_or_else<F>(&self, fallback: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        match self.get() {
            Some(value) => value.clone(),
            None => fallback(),
        }
    }

    /// Moves the held value out, leaving the optional empty
    pub fn take(&mut self) -> Option<T> {
        if self.has_value() {
            Some(self.slot.take())
        } else {
            None
        }
    }

    /// Engages the optional with `value`, returning the previously held value
    pub fn replace(&mut self, value: T) -> Option<T> {
        let previous = self.take();
        self.slot.construct(value);
        previous
    }

    /// Drops any held value and constructs `value` in its place
    pub fn insert(&mut self, value: T) -> &mut T {
        self.reset();
        self.slot.construct(value);
        self.held_mut()
    }

    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if !self.has_value() {
            self.slot.construct(f());
        }
        self.held_mut()
    }

    pub fn into_option(mut self) -> Option<T> {
        self.take()
    }

    /// Exchanges the states of two optionals, which may use different storage policies
    ///
    /// Two held values are swapped in place. A single held value is moved across,
    /// since a local slot has no handle that could change owners. Moves can't fail and
    /// heap exhaustion in `Dynamic` aborts rather than unwinds, so swap itself never
    /// leaves a half-done state. Panics can only come from a user `From` or `Clone`:
    /// `set`, `assign` and `from_optional` convert before touching the target, so it is
    /// left as it was, while `clone_from` into an engaged target inherits `T::clone_from`.
    pub fn swap<Q: StoragePolicy>(&mut self, other: &mut Optional<T, Q>) {
        match (self.has_value(), other.has_value()) {
            (true, true) => core::mem::swap(self.held_mut(), other.held_mut()),
            (false, true) => self.slot.construct(other.slot.take()),
            (true, false) => other.slot.construct(self.slot.take()),
            (false, false) => {}
        }
    }

    fn held(&self) -> &T {
        match self.slot.get() {
            Some(value) => value,
            None => contract_failure!("null optional dereferenced"),
        }
    }

    fn held_mut(&mut self) -> &mut T {
        match self.slot.get_mut() {
            Some(value) => value,
            None => contract_failure!("null optional dereferenced"),
        }
    }
}

/// Exchanges the states of `a` and `b`, see [`Optional::swap`]
pub fn swap<T, P: StoragePolicy, Q: StoragePolicy>(a: &mut Optional<T, P>, b: &mut Optional<T, Q>) {
    a.swap(b);
}

impl<T, P: StoragePolicy> Drop for Optional<T, P> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T, P: StoragePolicy> Default for Optional<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: StoragePolicy> From<Nullopt> for Optional<T, P> {
    fn from(_: Nullopt) -> Self {
        Self::new()
    }
}

impl<T, P: StoragePolicy> From<Optional<T, P>> for Option<T> {
    fn from(value: Optional<T, P>) -> Self {
        value.into_option()
    }
}

impl<T, P: StoragePolicy> From<&Optional<T, P>> for bool {
    fn from(value: &Optional<T, P>) -> Self {
        value.has_value()
    }
}

impl<T, P: StoragePolicy> Deref for Optional<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        self.held()
    }
}

impl<T, P: StoragePolicy> DerefMut for Optional<T, P> {
    fn deref_mut(&mut self) -> &mut T {
        self.held_mut()
    }
}

impl<T: Clone, P: StoragePolicy> Clone for Optional<T, P> {
    fn clone(&self) -> Self {
        Self::from_optional(self)
    }

    fn clone_from(&mut self, source: &Self) {
        match source.get() {
            Some(value) if self.has_value() => self.held_mut().clone_from(value),
            Some(value) => self.slot.construct(value.clone()),
            None => self.reset(),
        }
    }
}

impl<T: Debug, P: StoragePolicy> Debug for Optional<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Engaged").field(value).finish(),
            None => f.write_str("Nullopt"),
        }
    }
}

impl<T: Hash, P: StoragePolicy> Hash for Optional<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}
