use core::fmt::{Debug, LowerHex};

pub mod macros;
pub mod mem;

/// Formats the wrapped value as `0x..` in `Debug` output
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct DebugHex<T: LowerHex>(T);

impl<T: LowerHex> DebugHex<T> {
    pub fn new(value: T) -> Self {
        DebugHex(value)
    }
}

impl<T: LowerHex> Debug for DebugHex<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{:#x}", self.0))
    }
}
