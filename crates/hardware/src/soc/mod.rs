//! Machine storage.
//!
//! This module organizes the storage the processor operates on: the flat address
//! space with its RAM, video and ROM regions, the register file it owns, and the
//! locations that addressing-mode resolution produces.

/// Resolved operand locations (register or memory word).
pub mod location;

/// The address space: regions, word access and snapshots.
pub mod memory;

pub use location::Location;
pub use memory::AddressSpace;
