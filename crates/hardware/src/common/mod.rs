//! Common utilities and types used throughout the emulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the emulator. It includes:
//! 1. **Address Types:** A bounds-checked word address and the region it falls in.
//! 2. **Constants:** The fixed memory map and instruction field masks.
//! 3. **Error Handling:** Memory, load and step error types.
//! 4. **Register Management:** Register and flag identifiers and the register file.

/// Word address and region definitions.
pub mod addr;

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use addr::{Region, WordAddr};
pub use constants::{ADDRESS_SPACE_SIZE, ROM_BASE, ROM_END, ROM_SIZE, VIDEO_BASE, VIDEO_SIZE};
pub use error::{EmulatorError, LoadError, MemoryError};
pub use reg::{Flag, Psw, Register, RegisterFile};
