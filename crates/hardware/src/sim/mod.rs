//! Emulation utilities.
//!
//! Provides loading of program images from disk and the bounded execution traces
//! the engine fills while stepping.

/// Program image loading.
pub mod loader;

/// Disassembly and byte trace buffers.
pub mod trace;

pub use trace::{TraceBuffer, TraceLog};
