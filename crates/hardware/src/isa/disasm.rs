//! Instruction Disassembler.
//!
//! Renders a decoded instruction as `mnemonic operand[, operand]` text for the
//! execution trace, logging and test diagnostics. Numbers are printed in octal.
//!
//! # Operand syntax
//!
//! | Mode | General | On `pc` |
//! |------|---------|---------|
//! | 0 | `r` | `pc` |
//! | 1 | `(r)` | `(pc)` |
//! | 2 | `(r)+` | `#n` |
//! | 3 | `@(r)+` | `@#n` |
//! | 4 | `-(r)` | `-(pc)` |
//! | 5 | `@-(r)` | `@-(pc)` |
//! | 6 | `X(r)` | `X(pc)` |
//! | 7 | `@X(r)` | `@X(pc)` |
//!
//! # Usage
//!
//! ```
//! use pdp11_core::isa::disasm::{Extensions, disassemble};
//! use pdp11_core::isa::{InstructionTable, decode::load_operands};
//!
//! let table = InstructionTable::standard();
//! let word = 0o012701; // mov #n, r1
//! let desc = table.decode(word).unwrap();
//! let fields = load_operands(desc.shape(), word);
//! let ext = Extensions { src: Some(0o17), dst: None };
//! assert_eq!(disassemble(desc, &fields, ext), "mov #17, r1");
//! ```

use crate::common::Register;
use crate::core::arch::AddressingMode;
use crate::isa::instruction::{Fields, OperandSpec};
use crate::isa::table::InstructionDescriptor;

/// Extension words consumed while resolving each operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extensions {
    /// Word following the instruction consumed by the source operand.
    pub src: Option<u16>,
    /// Word consumed by the destination operand.
    pub dst: Option<u16>,
}

/// Disassembles one instruction.
///
/// An index operand whose extension word could not be read is shown with `?`
/// in place of the displacement.
pub fn disassemble(desc: &InstructionDescriptor, fields: &Fields, ext: Extensions) -> String {
    let name = desc.name();
    match *fields {
        Fields::NoOperand => name.to_string(),
        Fields::Single { dst } => format!("{name} {}", operand(dst, ext.dst)),
        Fields::Double { src, dst } => {
            format!("{name} {}, {}", operand(src, ext.src), operand(dst, ext.dst))
        }
        Fields::Branch { offset } => format!("{name} {offset:o}"),
    }
}

/// Formats a single operand specifier.
pub fn operand(spec: OperandSpec, ext: Option<u16>) -> String {
    let r = spec.reg;
    let disp = || ext.map_or_else(|| "?".to_string(), |n| format!("{n:o}"));
    match (spec.mode, r) {
        (AddressingMode::AutoIncrement, Register::Pc) if ext.is_some() => format!("#{}", disp()),
        (AddressingMode::AutoIncrementDeferred, Register::Pc) if ext.is_some() => {
            format!("@#{}", disp())
        }
        (AddressingMode::Register, _) => r.to_string(),
        (AddressingMode::RegisterDeferred, _) => format!("({r})"),
        (AddressingMode::AutoIncrement, _) => format!("({r})+"),
        (AddressingMode::AutoIncrementDeferred, _) => format!("@({r})+"),
        (AddressingMode::AutoDecrement, _) => format!("-({r})"),
        (AddressingMode::AutoDecrementDeferred, _) => format!("@-({r})"),
        (AddressingMode::Index, _) => format!("{}({r})", disp()),
        (AddressingMode::IndexDeferred, _) => format!("@{}({r})", disp()),
    }
}
