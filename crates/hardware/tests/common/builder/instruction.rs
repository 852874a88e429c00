//! Instruction word encoders.
//!
//! Operands are six-bit `mode << 3 | reg` specifiers built with [`operand`].

use pdp11_core::common::Register;
use pdp11_core::core::arch::AddressingMode;
use pdp11_core::isa::opcodes;

/// Encodes an operand specifier.
pub fn operand(mode: AddressingMode, reg: Register) -> u16 {
    (mode.bits() << 3) | reg.index() as u16
}

/// Register-direct operand.
pub fn reg(reg: Register) -> u16 {
    operand(AddressingMode::Register, reg)
}

/// Immediate operand `#n`; the value follows the instruction.
pub fn immediate() -> u16 {
    operand(AddressingMode::AutoIncrement, Register::Pc)
}

/// Absolute operand `@#n`; the address follows the instruction.
pub fn absolute() -> u16 {
    operand(AddressingMode::AutoIncrementDeferred, Register::Pc)
}

/// Encodes a single-operand instruction.
pub fn single(opcode: u16, dst: u16) -> u16 {
    opcode | (dst & 0o77)
}

/// Encodes a double-operand instruction.
pub fn double(opcode: u16, src: u16, dst: u16) -> u16 {
    opcode | ((src & 0o77) << 6) | (dst & 0o77)
}

/// Encodes `XOR reg, dst`.
pub fn xor(src: Register, dst: u16) -> u16 {
    opcodes::XOR | ((src.index() as u16) << 6) | (dst & 0o77)
}

/// Encodes a conditional branch.
pub fn branch(opcode: u16, offset: u8) -> u16 {
    opcode | u16::from(offset)
}

/// Serializes words into a little-endian program image.
pub fn image(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}
