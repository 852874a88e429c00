//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode catalog, operand field extraction, decoding logic and the
//! per-mnemonic semantic effects of the 16-bit word instruction set.
//!
//! # Shapes
//!
//! * No operand: `HALT`, `NOP` and the condition-code operations.
//! * Single operand: `CLR`, `INC`, `ROR`, ...
//! * Double operand: `MOV`, `ADD`, `CMP`, ...
//! * Double operand with register source: `XOR`.
//! * Conditional branch: `BR`, `BEQ`, `BHI`, ...

/// Instruction decoding: table lookup and operand field extraction.
pub mod decode;

/// Instruction disassembler for the execution trace and diagnostics.
pub mod disasm;

/// Instruction shapes, operand specifiers and bit extraction utilities.
pub mod instruction;

/// Opcode values and match masks.
pub mod opcodes;

/// Semantic effects, one per mnemonic.
pub mod semantics;

/// The instruction table and its descriptors.
pub mod table;

pub use instruction::{Fields, InstructionShape, OperandSpec};
pub use table::{Effect, InstructionDescriptor, InstructionTable, STANDARD_TABLE};
