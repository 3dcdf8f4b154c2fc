use core::{fmt::Debug, mem::MaybeUninit};

use static_assertions::const_assert_eq;

use super::{macros::debug_asserts, DebugHex};

/// Byte layout of `SIZE` bytes aligned to `ALIGNMENT` \
/// Never constructed, only used as the layout parameter of an `AlignedStorage`
#[repr(C)]
pub struct Bytes<const SIZE: usize, const ALIGNMENT: usize> where elain::Align<ALIGNMENT>: elain::Alignment {
    _align: elain::Align<ALIGNMENT>,
    _bytes: [u8; SIZE],
}

/// A region of at least `SIZE` bytes whose address is a multiple of `ALIGNMENT` \
/// `ALIGNMENT` must be a power of two, `SIZE` is rounded up to a multiple of it
pub type AlignedBytes<const SIZE: usize, const ALIGNMENT: usize> = AlignedStorage<Bytes<SIZE, ALIGNMENT>>;

const_assert_eq!(core::mem::size_of::<AlignedBytes<3, 4>>(), 4);
const_assert_eq!(core::mem::align_of::<AlignedBytes<3, 4>>(), 4);
const_assert_eq!(core::mem::size_of::<AlignedBytes<0, 64>>(), 0);
const_assert_eq!(core::mem::align_of::<AlignedBytes<1, 4096>>(), 4096);

/// Uninitialized storage with the size and alignment of `L`
///
/// The region is opaque bytes: it never constructs or drops a value placed into it,
/// whoever writes a value owns dropping it. Its address is fixed for as long as the
/// storage itself is not moved.
#[repr(transparent)]
pub struct AlignedStorage<L> {
    region: MaybeUninit<L>,
}

impl<L> AlignedStorage<L> {
    pub const SIZE: usize = core::mem::size_of::<L>();
    pub const ALIGN: usize = core::mem::align_of::<L>();

    /// Reserves the region, its contents are uninitialized
    pub const fn new() -> Self {
        Self { region: MaybeUninit::uninit() }
    }

    pub fn address(&self) -> *const u8 {
        let address = self.region.as_ptr().cast::<u8>();
        debug_asserts!({
            assert_eq!(address as usize % Self::ALIGN, 0, "misaligned storage region");
        });
        address
    }

    pub fn address_mut(&mut self) -> *mut u8 {
        let address = self.region.as_mut_ptr().cast::<u8>();
        debug_asserts!({
            assert_eq!(address as usize % Self::ALIGN, 0, "misaligned storage region");
        });
        address
    }

    pub(crate) fn as_ptr(&self) -> *const L {
        self.region.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut L {
        self.region.as_mut_ptr()
    }
}

impl<L> Default for AlignedStorage<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Debug for AlignedStorage<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AlignedStorage")
            .field("size", &Self::SIZE)
            .field("align", &Self::ALIGN)
            .field("address", &DebugHex::new(self.address() as usize))
            .finish()
    }
}
