//! Addressing Modes.
//!
//! This module defines the eight addressing modes a three-bit mode field selects.
//! It implements the following:
//! 1. **Mode Classification:** Register, deferred, auto-increment/decrement and index forms.
//! 2. **Conversion:** Mapping from the raw mode field to an enum variant.
//! 3. **Observability:** Human-readable naming for traces and test diagnostics.

/// Operand addressing mode, numbered as in the instruction encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressingMode {
    /// Mode 0: the operand is the register itself.
    Register = 0,

    /// Mode 1: the register holds the operand's address.
    RegisterDeferred = 1,

    /// Mode 2: the register holds the operand's address and is then incremented by 2.
    ///
    /// On `pc` this is immediate mode.
    AutoIncrement = 2,

    /// Mode 3: the register points at the operand's address and is then incremented by 2.
    ///
    /// On `pc` this is absolute mode.
    AutoIncrementDeferred = 3,

    /// Mode 4: the register is decremented by 2, then holds the operand's address.
    AutoDecrement = 4,

    /// Mode 5: the register is decremented by 2, then points at the operand's address.
    AutoDecrementDeferred = 5,

    /// Mode 6: the operand is at register plus the following instruction word.
    ///
    /// On `pc` this is relative mode.
    Index = 6,

    /// Mode 7: register plus the following instruction word points at the operand's address.
    IndexDeferred = 7,
}

impl AddressingMode {
    /// All modes in encoding order.
    pub const ALL: [Self; 8] = [
        Self::Register,
        Self::RegisterDeferred,
        Self::AutoIncrement,
        Self::AutoIncrementDeferred,
        Self::AutoDecrement,
        Self::AutoDecrementDeferred,
        Self::Index,
        Self::IndexDeferred,
    ];

    /// Converts a three-bit mode field to an addressing mode.
    ///
    /// Only the low three bits of `val` are used.
    pub const fn from_bits(val: u16) -> Self {
        Self::ALL[(val & 0o7) as usize]
    }

    /// Returns the numeric mode (0-7).
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Whether the mode dereferences a pointer held in memory.
    pub const fn is_deferred(self) -> bool {
        matches!(
            self,
            Self::AutoIncrementDeferred | Self::AutoDecrementDeferred | Self::IndexDeferred
        )
    }

    /// Returns the human-readable name of the mode.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::RegisterDeferred => "register deferred",
            Self::AutoIncrement => "autoincrement",
            Self::AutoIncrementDeferred => "autoincrement deferred",
            Self::AutoDecrement => "autodecrement",
            Self::AutoDecrementDeferred => "autodecrement deferred",
            Self::Index => "index",
            Self::IndexDeferred => "index deferred",
        }
    }
}

impl std::fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
