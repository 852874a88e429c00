//! Architecture-specific components.
//!
//! The register file and condition codes live in [`crate::common::reg`]; this module
//! holds the operand addressing modes of the instruction set.

/// Operand addressing modes.
pub mod mode;

pub use mode::AddressingMode;
