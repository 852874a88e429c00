//! Global System Constants.
//!
//! This module defines the fixed memory map and instruction-level constants. It includes:
//! 1. **Memory Map:** Sizes and base addresses of the RAM, video and ROM regions.
//! 2. **Instruction Constants:** Word size and the field masks shared by the decoder.
//! 3. **Pipeline Constants:** The default per-stage tick cost.

/// Size of the general purpose RAM region in bytes (16 KiB).
pub const RAM_SIZE: usize = 0x4000;

/// Size of the memory-mapped video region in bytes (16 KiB).
pub const VIDEO_SIZE: usize = 0x4000;

/// Size of the program ROM region in bytes (16 KiB).
pub const ROM_SIZE: usize = 0x4000;

/// Base address of RAM. RAM always starts at address zero.
pub const RAM_BASE: u16 = 0x0000;

/// Base address of the video region, directly after RAM.
pub const VIDEO_BASE: u16 = RAM_BASE + RAM_SIZE as u16;

/// Base address of ROM, directly after the video region.
pub const ROM_BASE: u16 = VIDEO_BASE + VIDEO_SIZE as u16;

/// Total length of the flat address space in bytes.
pub const ADDRESS_SPACE_SIZE: usize = RAM_SIZE + VIDEO_SIZE + ROM_SIZE;

/// First address past the end of ROM.
pub const ROM_END: u32 = ADDRESS_SPACE_SIZE as u32;

/// Size of one machine word in bytes.
pub const WORD_SIZE: u16 = 2;

/// Number of general purpose registers (`r0`-`r7`).
pub const REGISTER_COUNT: usize = 8;

/// Mask for a three-bit register or mode field.
pub const FIELD_MASK: u16 = 0o7;

/// Mask for the eight-bit branch displacement.
pub const BRANCH_OFFSET_MASK: u16 = 0x00FF;

/// Sign bit of a 16-bit word.
pub const SIGN_BIT: u16 = 0x8000;

/// Default cost in ticks of a single pipeline stage.
pub const DEFAULT_STAGE_TICKS: u64 = 1;

/// Default number of entries retained by each trace buffer.
pub const DEFAULT_TRACE_DEPTH: usize = 1024;
