//! Builders for test inputs.

/// Instruction word encoders.
pub mod instruction;
