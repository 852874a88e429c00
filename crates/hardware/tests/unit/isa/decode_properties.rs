//! Instruction Decode Properties.
//!
//! Verifies that `decode()` selects exactly one descriptor for every catalogued
//! encoding and that operand fields are extracted for each shape.
//!
//! # Coverage Matrix
//!
//! - No operand:       HALT, NOP, condition-code operations
//! - Single operand:   CLR ... ASL, SWAB
//! - Double operand:   MOV ... SUB
//! - Register source:  XOR
//! - Branch:           BR ... BCS

use pdp11_core::common::Register;
use pdp11_core::core::arch::AddressingMode;
use pdp11_core::isa::decode::{decode, load_operands};
use pdp11_core::isa::instruction::InstructionBits;
use pdp11_core::isa::{Fields, InstructionShape, InstructionTable, OperandSpec, STANDARD_TABLE};
use proptest::prelude::*;
use rstest::rstest;

use crate::common::{branch, double, operand, single, xor};

#[test]
fn no_word_matches_two_entries() {
    for word in 0..=u16::MAX {
        let hits: Vec<_> = STANDARD_TABLE
            .iter()
            .filter(|desc| desc.matches(word))
            .map(|desc| desc.name())
            .collect();
        assert!(hits.len() <= 1, "{word:#08o} matches {hits:?}");
    }
}

#[test]
fn every_opcode_decodes_to_its_own_entry() {
    let table = InstructionTable::standard();
    for desc in table.entries() {
        let found = table.decode(desc.opcode()).unwrap();
        assert_eq!(found.name(), desc.name());
    }
}

#[rstest]
#[case(0o000001)]
#[case(0o000007)]
#[case(0o000100)]
#[case(0o070000)]
#[case(0o104000)]
#[case(0o170000)]
#[case(0o177777)]
fn unassigned_words_do_not_decode(#[case] word: u16) {
    assert!(InstructionTable::standard().decode(word).is_none());
}

#[rstest]
#[case(0o005200, "inc")]
#[case(0o005277, "inc")]
#[case(0o000300, "swab")]
#[case(0o010203, "mov")]
#[case(0o167777, "sub")]
#[case(0o074312, "xor")]
#[case(0o000777, "br")]
#[case(0o103400, "bcs")]
#[case(0o000257, "ccc")]
fn words_decode_by_mask(#[case] word: u16, #[case] name: &str) {
    let desc = decode(&STANDARD_TABLE, word).unwrap();
    assert_eq!(desc.name(), name);
}

#[test]
fn field_extraction() {
    let word: u16 = 0o012345;
    assert_eq!(word.src_mode(), 2);
    assert_eq!(word.src_reg(), 3);
    assert_eq!(word.dst_mode(), 4);
    assert_eq!(word.dst_reg(), 5);
    assert_eq!(0o001777u16.branch_offset(), 0o377);
}

#[test]
fn double_operand_fields() {
    let word = double(
        0o010000,
        operand(AddressingMode::AutoIncrement, Register::Pc),
        operand(AddressingMode::Index, Register::R3),
    );
    assert_eq!(
        load_operands(InstructionShape::DoubleOperand, word),
        Fields::Double {
            src: OperandSpec {
                mode: AddressingMode::AutoIncrement,
                reg: Register::Pc,
            },
            dst: OperandSpec {
                mode: AddressingMode::Index,
                reg: Register::R3,
            },
        }
    );
}

#[test]
fn register_source_is_always_direct() {
    let word = xor(Register::R5, operand(AddressingMode::RegisterDeferred, Register::R1));
    assert_eq!(
        load_operands(InstructionShape::DoubleOperandReg, word),
        Fields::Double {
            src: OperandSpec::register(Register::R5),
            dst: OperandSpec {
                mode: AddressingMode::RegisterDeferred,
                reg: Register::R1,
            },
        }
    );
}

#[test]
fn single_and_branch_fields() {
    let word = single(0o005000, operand(AddressingMode::AutoDecrement, Register::Sp));
    assert_eq!(
        load_operands(InstructionShape::SingleOperand, word),
        Fields::Single {
            dst: OperandSpec {
                mode: AddressingMode::AutoDecrement,
                reg: Register::Sp,
            },
        }
    );
    assert_eq!(
        load_operands(InstructionShape::ConditionalBranch, branch(0o001000, 0xFE)),
        Fields::Branch { offset: 0xFE }
    );
    assert_eq!(
        load_operands(InstructionShape::NoOperand, 0o000240),
        Fields::NoOperand
    );
}

proptest! {
    #[test]
    fn operand_bits_never_change_the_match(index in 0usize..STANDARD_TABLE.len(), bits in any::<u16>()) {
        let desc = &STANDARD_TABLE[index];
        let word = desc.opcode() | (bits & !desc.mask());
        let found = decode(&STANDARD_TABLE, word);
        prop_assert!(found.is_some());
        prop_assert_eq!(found.map(|d| d.name()), Some(desc.name()));
    }
}
