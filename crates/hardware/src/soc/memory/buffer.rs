//! Backing store for the flat address space.
//!
//! A fixed-size, zero-initialised byte buffer with little-endian word access. Bounds
//! are asserted here; callers are expected to have checked addresses through
//! [`AddressSpace`](super::AddressSpace) first.

/// A fixed-size byte buffer.
#[derive(Clone, Debug)]
pub struct MemoryBuffer {
    bytes: Box<[u8]>,
}

impl MemoryBuffer {
    /// Creates a new zero-filled buffer of the specified size.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size].into_boxed_slice(),
        }
    }

    /// Returns the size of the buffer in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer has no bytes.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reads a little-endian word.
    #[inline]
    pub fn read_u16(&self, offset: usize) -> u16 {
        u16::from_le_bytes([self.bytes[offset], self.bytes[offset + 1]])
    }

    /// Writes a little-endian word.
    #[inline]
    pub fn write_u16(&mut self, offset: usize, val: u16) {
        self.bytes[offset..offset + 2].copy_from_slice(&val.to_le_bytes());
    }

    /// Reads a slice of memory.
    pub fn read_slice(&self, offset: usize, len: usize) -> &[u8] {
        &self.bytes[offset..offset + len]
    }

    /// Writes a slice of memory.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) {
        self.bytes[offset..offset + data.len()].copy_from_slice(data);
    }

    /// Zeroes a range of memory.
    pub fn clear(&mut self, offset: usize, len: usize) {
        self.bytes[offset..offset + len].fill(0);
    }
}
