//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and structures for decoding the operand
//! fields of a 16-bit instruction word. Extraction is masking and shifting only;
//! no field is sign-extended.

use crate::common::Register;
use crate::common::constants::{BRANCH_OFFSET_MASK, FIELD_MASK};
use crate::core::arch::AddressingMode;

/// Bit shift of the source mode field (bits 11-9).
pub const SRC_MODE_SHIFT: u16 = 9;
/// Bit shift of the source register field (bits 8-6).
pub const SRC_REG_SHIFT: u16 = 6;
/// Bit shift of the destination mode field (bits 5-3).
pub const DST_MODE_SHIFT: u16 = 3;
/// Bit shift of the destination register field (bits 2-0).
pub const DST_REG_SHIFT: u16 = 0;

/// The operand layout of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionShape {
    /// No operand fields (`HALT`, condition-code operations).
    NoOperand,
    /// One mode/register pair in bits 5-0.
    SingleOperand,
    /// Source mode/register in bits 11-6 and destination mode/register in bits 5-0.
    DoubleOperand,
    /// Register source in bits 8-6 (always register direct) and a destination
    /// mode/register pair in bits 5-0.
    DoubleOperandReg,
    /// An eight-bit displacement in bits 7-0.
    ConditionalBranch,
}

/// Trait for extracting operand fields from an instruction word.
pub trait InstructionBits {
    /// Extracts the source mode field (bits 11-9).
    fn src_mode(&self) -> u16;

    /// Extracts the source register field (bits 8-6).
    fn src_reg(&self) -> u16;

    /// Extracts the destination mode field (bits 5-3).
    fn dst_mode(&self) -> u16;

    /// Extracts the destination register field (bits 2-0).
    fn dst_reg(&self) -> u16;

    /// Extracts the branch displacement (bits 7-0), unsigned.
    fn branch_offset(&self) -> u8;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn src_mode(&self) -> u16 {
        (self >> SRC_MODE_SHIFT) & FIELD_MASK
    }

    #[inline(always)]
    fn src_reg(&self) -> u16 {
        (self >> SRC_REG_SHIFT) & FIELD_MASK
    }

    #[inline(always)]
    fn dst_mode(&self) -> u16 {
        (self >> DST_MODE_SHIFT) & FIELD_MASK
    }

    #[inline(always)]
    fn dst_reg(&self) -> u16 {
        (self >> DST_REG_SHIFT) & FIELD_MASK
    }

    #[inline(always)]
    fn branch_offset(&self) -> u8 {
        (self & BRANCH_OFFSET_MASK) as u8
    }
}

/// A decoded mode/register operand specifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OperandSpec {
    /// Addressing mode.
    pub mode: AddressingMode,
    /// Register the mode applies to.
    pub reg: Register,
}

impl OperandSpec {
    /// Builds a specifier from raw three-bit mode and register fields.
    pub fn from_fields(mode: u16, reg: u16) -> Self {
        Self {
            mode: AddressingMode::from_bits(mode),
            reg: Register::from_index((reg & FIELD_MASK) as usize),
        }
    }

    /// A register-direct specifier.
    pub const fn register(reg: Register) -> Self {
        Self {
            mode: AddressingMode::Register,
            reg,
        }
    }
}

/// Operand fields extracted for the matched instruction shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fields {
    /// No operands.
    NoOperand,
    /// A single destination operand.
    Single {
        /// Destination operand.
        dst: OperandSpec,
    },
    /// A source and a destination operand.
    Double {
        /// Source operand.
        src: OperandSpec,
        /// Destination operand.
        dst: OperandSpec,
    },
    /// A branch displacement in words.
    Branch {
        /// Unsigned displacement.
        offset: u8,
    },
}
