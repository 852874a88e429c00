//! Instruction Decoder.
//!
//! Maps a 16-bit instruction word to its table descriptor and extracts the operand
//! fields the descriptor's shape calls for. Decoding is pure: it never touches the
//! address space, so index words are consumed later by operand resolution.

use crate::common::Register;
use crate::isa::instruction::{Fields, InstructionBits, InstructionShape, OperandSpec};
use crate::isa::table::InstructionDescriptor;

/// Finds the first descriptor whose mask and opcode select `word`.
///
/// Returns `None` when no entry matches; the caller reports the word as an
/// invalid opcode.
///
/// # Arguments
///
/// * `entries` - Descriptors in match order.
/// * `word` - The raw instruction word.
pub fn decode(entries: &[InstructionDescriptor], word: u16) -> Option<&InstructionDescriptor> {
    entries.iter().find(|desc| desc.matches(word))
}

/// Extracts the operand fields of `word` for the given shape.
///
/// The register source of [`InstructionShape::DoubleOperandReg`] is always register
/// direct, whatever bits 11-9 contain.
pub fn load_operands(shape: InstructionShape, word: u16) -> Fields {
    match shape {
        InstructionShape::NoOperand => Fields::NoOperand,
        InstructionShape::SingleOperand => Fields::Single {
            dst: destination(word),
        },
        InstructionShape::DoubleOperand => Fields::Double {
            src: OperandSpec::from_fields(word.src_mode(), word.src_reg()),
            dst: destination(word),
        },
        InstructionShape::DoubleOperandReg => Fields::Double {
            src: OperandSpec::register(Register::from_index(word.src_reg() as usize)),
            dst: destination(word),
        },
        InstructionShape::ConditionalBranch => Fields::Branch {
            offset: word.branch_offset(),
        },
    }
}

#[inline]
fn destination(word: u16) -> OperandSpec {
    OperandSpec::from_fields(word.dst_mode(), word.dst_reg())
}
