//! Comparisons against other optionals, the `Nullopt` sentinel and raw values
//!
//! An empty optional equals only another empty optional or `Nullopt`, and orders
//! before every engaged optional and every raw value.

use core::cmp::Ordering;

use crate::storage::StoragePolicy;

use super::{Nullopt, Optional};

impl<T, P: StoragePolicy> Optional<T, P> {
    /// Compares against a raw value, an empty optional is never equal
    pub fn eq_value<U: ?Sized>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self.get() {
            Some(held) => held == value,
            None => false,
        }
    }

    /// Orders against a raw value, an empty optional is always less
    pub fn partial_cmp_value<U: ?Sized>(&self, value: &U) -> Option<Ordering>
    where
        T: PartialOrd<U>,
    {
        match self.get() {
            Some(held) => held.partial_cmp(value),
            None => Some(Ordering::Less),
        }
    }
}

impl<T, U, P, Q> PartialEq<Optional<U, Q>> for Optional<T, P>
where
    T: PartialEq<U>,
    P: StoragePolicy,
    Q: StoragePolicy,
{
    fn eq(&self, other: &Optional<U, Q>) -> bool {
        match (self.get(), other.get()) {
            (Some(x), Some(y)) => x == y,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq, P: StoragePolicy> Eq for Optional<T, P> {}

impl<T, U, P, Q> PartialOrd<Optional<U, Q>> for Optional<T, P>
where
    T: PartialOrd<U>,
    P: StoragePolicy,
    Q: StoragePolicy,
{
    fn partial_cmp(&self, other: &Optional<U, Q>) -> Option<Ordering> {
        match (self.get(), other.get()) {
            (Some(x), Some(y)) => x.partial_cmp(y),
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (None, None) => Some(Ordering::Equal),
        }
    }
}

impl<T: Ord, P: StoragePolicy> Ord for Optional<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl<T, P: StoragePolicy> PartialEq<Nullopt> for Optional<T, P> {
    fn eq(&self, _: &Nullopt) -> bool {
        !self.has_value()
    }
}

impl<T, P: StoragePolicy> PartialEq<Optional<T, P>> for Nullopt {
    fn eq(&self, other: &Optional<T, P>) -> bool {
        !other.has_value()
    }
}

impl<T, P: StoragePolicy> PartialOrd<Nullopt> for Optional<T, P> {
    fn partial_cmp(&self, _: &Nullopt) -> Option<Ordering> {
        if self.has_value() {
            Some(Ordering::Greater)
        } else {
            Some(Ordering::Equal)
        }
    }
}

impl<T, P: StoragePolicy> PartialOrd<Optional<T, P>> for Nullopt {
    fn partial_cmp(&self, other: &Optional<T, P>) -> Option<Ordering> {
        if other.has_value() {
            Some(Ordering::Less)
        } else {
            Some(Ordering::Equal)
        }
    }
}

// Raw value comparisons can't be blanket impls without overlapping the optional ones,
// so they're spelled out per value type.
macro_rules! value_comparisons {
    ($([$($lt:lifetime),*] $value:ty),* $(,)?) => {
        $(
            impl<$($lt,)* T, P> PartialEq<$value> for Optional<T, P>
            where
                T: PartialEq<$value>,
                P: StoragePolicy,
            {
                fn eq(&self, other: &$value) -> bool {
                    self.eq_value(other)
                }
            }

            impl<$($lt,)* T, P> PartialEq<Optional<T, P>> for $value
            where
                $value: PartialEq<T>,
                P: StoragePolicy,
            {
                fn eq(&self, other: &Optional<T, P>) -> bool {
                    match other.get() {
                        Some(held) => self == held,
                        None => false,
                    }
                }
            }

            impl<$($lt,)* T, P> PartialOrd<$value> for Optional<T, P>
            where
                T: PartialOrd<$value>,
                P: StoragePolicy,
            {
                fn partial_cmp(&self, other: &$value) -> Option<Ordering> {
                    self.partial_cmp_value(other)
                }
            }

            impl<$($lt,)* T, P> PartialOrd<Optional<T, P>> for $value
            where
                $value: PartialOrd<T>,
                P: StoragePolicy,
            {
                fn partial_cmp(&self, other: &Optional<T, P>) -> Option<Ordering> {
                    match other.get() {
                        Some(held) => self.partial_cmp(held),
                        None => Some(Ordering::Greater),
                    }
                }
            }
        )*
    };
}

value_comparisons! {
    [] bool, [] char,
    [] i8, [] i16, [] i32, [] i64, [] i128, [] isize,
    [] u8, [] u16, [] u32, [] u64, [] u128, [] usize,
    [] f32, [] f64,
    [] str, ['a] &'a str,
}

cfg_if::cfg_if! {
    if #[cfg(feature = "alloc")] {
        value_comparisons! {
            [] alloc::string::String,
        }
    }
}
