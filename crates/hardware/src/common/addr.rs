//! Word address type.
//!
//! This module defines `WordAddr`, the address of a bounds-checked word in the flat
//! address space. It provides the following:
//! 1. **Type Safety:** A `WordAddr` can only be produced by the address space after
//!    checking that both of its bytes lie inside the space.
//! 2. **Region Lookup:** Reports which region (RAM, video, ROM) holds the word.

use super::constants::{ADDRESS_SPACE_SIZE, ROM_BASE, VIDEO_BASE};

/// One of the three fixed regions of the address space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// General purpose read/write memory.
    Ram,
    /// Memory-mapped video buffer.
    Video,
    /// Program image, populated once at load time.
    Rom,
}

/// The address of a word known to be inside the address space.
///
/// Handed out by [`AddressSpace::read_word_address`](crate::soc::AddressSpace::read_word_address);
/// `addr + 1` is always a valid byte address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordAddr(u16);

impl WordAddr {
    /// Wraps an address after the caller has verified it.
    #[inline(always)]
    pub(crate) const fn new_checked(addr: u16) -> Self {
        debug_assert!((addr as usize) + 1 < ADDRESS_SPACE_SIZE);
        Self(addr)
    }

    /// Returns the raw 16-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Returns the byte offset of the word into the flat backing store.
    #[inline(always)]
    pub const fn offset(self) -> usize {
        self.0 as usize
    }

    /// Returns the region holding the first byte of this word.
    pub const fn region(self) -> Region {
        if self.0 >= ROM_BASE {
            Region::Rom
        } else if self.0 >= VIDEO_BASE {
            Region::Video
        } else {
            Region::Ram
        }
    }
}
