//! Resolved operand locations.
//!
//! A `Location` names where an operand lives once its addressing mode has been
//! resolved: either a register or a bounds-checked word in memory.

use std::fmt;

use crate::common::{Register, WordAddr};

/// Storage for a resolved operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// The operand is held in a register.
    Register(Register),
    /// The operand is the word at a checked address.
    Memory(WordAddr),
}

impl Location {
    /// Returns the memory address of the operand, if it lives in memory.
    pub const fn addr(self) -> Option<WordAddr> {
        match self {
            Self::Memory(addr) => Some(addr),
            Self::Register(_) => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register(reg) => write!(f, "{reg}"),
            Self::Memory(addr) => write!(f, "[{:#06x}]", addr.val()),
        }
    }
}
