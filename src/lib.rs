//! An optional container whose value storage is chosen at the type level
//!
//! ```
//! use optslot::{Dynamic, Local, Optional, NULLOPT};
//!
//! let mut inline = Optional::<i32, Local>::some(42);
//! let mut boxed = Optional::<i32, Dynamic>::from(NULLOPT);
//! inline.swap(&mut boxed);
//!
//! assert!(!inline.has_value());
//! assert_eq!(*boxed, 42);
//! assert!(inline.value().is_err());
//! ```

#![no_std]

#![deny(unsafe_op_in_unsafe_fn)]

cfg_if::cfg_if! {
    if #[cfg(feature = "alloc")] {
        extern crate alloc;

        pub use storage::{Dynamic, DynamicSlot};
    }
}

#[cfg(test)]
extern crate std;

pub mod common;
pub mod error;
pub mod optional;
pub mod storage;

pub use error::BadOptionalAccess;
pub use optional::{swap, Nullopt, Optional, NULLOPT};
pub use storage::{Local, LocalSlot, Slot, StoragePolicy};
