//! Instruction Opcodes and Masks.
//!
//! Defines the opcode value and match mask of every instruction in the standard table.
//! Values are written in octal, the notation of the PDP-11 processor handbook.

/// Mask matching an entire word (no operand fields).
pub const MASK_NO_OPERAND: u16 = 0o177777;

/// Mask for single-operand instructions (bits 5-0 are the operand).
pub const MASK_SINGLE_OPERAND: u16 = 0o177700;

/// Mask for double-operand instructions (bits 11-0 are the operands).
pub const MASK_DOUBLE_OPERAND: u16 = 0o170000;

/// Mask for register-source double-operand instructions (bits 8-0 are the operands).
pub const MASK_DOUBLE_OPERAND_REG: u16 = 0o177000;

/// Mask for conditional branches (bits 7-0 are the displacement).
pub const MASK_BRANCH: u16 = 0o177400;

// No-operand instructions.

/// Halt the processor.
pub const HALT: u16 = 0o000000;
/// No operation.
pub const NOP: u16 = 0o000240;
/// Clear carry.
pub const CLC: u16 = 0o000241;
/// Clear overflow.
pub const CLV: u16 = 0o000242;
/// Clear zero.
pub const CLZ: u16 = 0o000244;
/// Clear negative.
pub const CLN: u16 = 0o000250;
/// Clear all condition codes.
pub const CCC: u16 = 0o000257;
/// Set carry.
pub const SEC: u16 = 0o000261;
/// Set overflow.
pub const SEV: u16 = 0o000262;
/// Set zero.
pub const SEZ: u16 = 0o000264;
/// Set negative.
pub const SEN: u16 = 0o000270;
/// Set all condition codes.
pub const SCC: u16 = 0o000277;

// Single-operand instructions.

/// Swap bytes.
pub const SWAB: u16 = 0o000300;
/// Clear.
pub const CLR: u16 = 0o005000;
/// Complement.
pub const COM: u16 = 0o005100;
/// Increment.
pub const INC: u16 = 0o005200;
/// Decrement.
pub const DEC: u16 = 0o005300;
/// Negate.
pub const NEG: u16 = 0o005400;
/// Add carry.
pub const ADC: u16 = 0o005500;
/// Subtract carry.
pub const SBC: u16 = 0o005600;
/// Test.
pub const TST: u16 = 0o005700;
/// Rotate right.
pub const ROR: u16 = 0o006000;
/// Rotate left.
pub const ROL: u16 = 0o006100;
/// Arithmetic shift right.
pub const ASR: u16 = 0o006200;
/// Arithmetic shift left.
pub const ASL: u16 = 0o006300;

// Double-operand instructions.

/// Move.
pub const MOV: u16 = 0o010000;
/// Compare.
pub const CMP: u16 = 0o020000;
/// Bit test.
pub const BIT: u16 = 0o030000;
/// Bit clear.
pub const BIC: u16 = 0o040000;
/// Bit set.
pub const BIS: u16 = 0o050000;
/// Add.
pub const ADD: u16 = 0o060000;
/// Subtract.
pub const SUB: u16 = 0o160000;

// Register-source double-operand instructions.

/// Exclusive or.
pub const XOR: u16 = 0o074000;

// Conditional branches.

/// Branch always.
pub const BR: u16 = 0o000400;
/// Branch if not equal.
pub const BNE: u16 = 0o001000;
/// Branch if equal.
pub const BEQ: u16 = 0o001400;
/// Branch if greater or equal (signed).
pub const BGE: u16 = 0o002000;
/// Branch if less than (signed).
pub const BLT: u16 = 0o002400;
/// Branch if greater than (signed).
pub const BGT: u16 = 0o003000;
/// Branch if less or equal (signed).
pub const BLE: u16 = 0o003400;
/// Branch if plus.
pub const BPL: u16 = 0o100000;
/// Branch if minus.
pub const BMI: u16 = 0o100400;
/// Branch if higher (unsigned).
pub const BHI: u16 = 0o101000;
/// Branch if lower or same (unsigned).
pub const BLOS: u16 = 0o101400;
/// Branch if overflow clear.
pub const BVC: u16 = 0o102000;
/// Branch if overflow set.
pub const BVS: u16 = 0o102400;
/// Branch if carry clear.
pub const BCC: u16 = 0o103000;
/// Branch if carry set.
pub const BCS: u16 = 0o103400;
