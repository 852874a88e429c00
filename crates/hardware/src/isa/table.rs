//! Instruction Table.
//!
//! The static catalog of instruction descriptors. Each descriptor pairs a match
//! mask and opcode with an operand shape, a display name and a semantic effect.
//!
//! Lookup is a linear scan where the first match wins, so entries are declared
//! narrowest mask first. The standard table is also collision-free: no word
//! matches more than one entry.

use super::instruction::InstructionShape;
use super::opcodes::{
    self as op, MASK_BRANCH, MASK_DOUBLE_OPERAND, MASK_DOUBLE_OPERAND_REG, MASK_NO_OPERAND,
    MASK_SINGLE_OPERAND,
};
use super::semantics as sem;
use crate::core::units::bru::{self, Condition};
use crate::soc::{AddressSpace, Location};

/// Effect of an instruction with no operands.
pub type NoOperandFn = fn(&mut AddressSpace);

/// Effect of an instruction with one resolved operand.
pub type SingleFn = fn(&mut AddressSpace, Location);

/// Effect of an instruction with resolved source and destination operands.
pub type DoubleFn = fn(&mut AddressSpace, Location, Location);

/// The semantic effect of an instruction, typed by the operands it consumes.
#[derive(Clone, Copy, Debug)]
pub enum Effect {
    /// Takes no operands.
    NoOperand(NoOperandFn),
    /// Takes the destination operand.
    Single(SingleFn),
    /// Takes source and destination operands.
    Double(DoubleFn),
    /// Branches when the predicate holds.
    Branch(Condition),
}

/// One entry of the instruction table.
#[derive(Clone, Copy, Debug)]
pub struct InstructionDescriptor {
    mask: u16,
    opcode: u16,
    shape: InstructionShape,
    name: &'static str,
    effect: Effect,
}

impl InstructionDescriptor {
    /// A no-operand instruction; the whole word must equal `opcode`.
    pub const fn no_operand(name: &'static str, opcode: u16, f: NoOperandFn) -> Self {
        Self {
            mask: MASK_NO_OPERAND,
            opcode,
            shape: InstructionShape::NoOperand,
            name,
            effect: Effect::NoOperand(f),
        }
    }

    /// A single-operand instruction.
    pub const fn single(name: &'static str, opcode: u16, f: SingleFn) -> Self {
        Self {
            mask: MASK_SINGLE_OPERAND,
            opcode,
            shape: InstructionShape::SingleOperand,
            name,
            effect: Effect::Single(f),
        }
    }

    /// A double-operand instruction with independent source and destination modes.
    pub const fn double(name: &'static str, opcode: u16, f: DoubleFn) -> Self {
        Self {
            mask: MASK_DOUBLE_OPERAND,
            opcode,
            shape: InstructionShape::DoubleOperand,
            name,
            effect: Effect::Double(f),
        }
    }

    /// A double-operand instruction whose source is a register, always register direct.
    pub const fn double_reg(name: &'static str, opcode: u16, f: DoubleFn) -> Self {
        Self {
            mask: MASK_DOUBLE_OPERAND_REG,
            opcode,
            shape: InstructionShape::DoubleOperandReg,
            name,
            effect: Effect::Double(f),
        }
    }

    /// A conditional branch.
    pub const fn branch(name: &'static str, opcode: u16, cond: Condition) -> Self {
        Self {
            mask: MASK_BRANCH,
            opcode,
            shape: InstructionShape::ConditionalBranch,
            name,
            effect: Effect::Branch(cond),
        }
    }

    /// Overrides the match mask.
    pub const fn with_mask(mut self, mask: u16) -> Self {
        self.mask = mask;
        self
    }

    /// Whether `word` selects this instruction.
    #[inline(always)]
    pub const fn matches(&self, word: u16) -> bool {
        word & self.mask == self.opcode
    }

    /// Match mask.
    pub const fn mask(&self) -> u16 {
        self.mask
    }

    /// Opcode the masked word must equal.
    pub const fn opcode(&self) -> u16 {
        self.opcode
    }

    /// Operand shape.
    pub const fn shape(&self) -> InstructionShape {
        self.shape
    }

    /// Lowercase mnemonic.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Semantic effect.
    pub const fn effect(&self) -> Effect {
        self.effect
    }
}

/// The standard instruction set, ordered narrowest mask first.
pub static STANDARD_TABLE: [InstructionDescriptor; 48] = [
    InstructionDescriptor::no_operand("halt", op::HALT, sem::halt),
    InstructionDescriptor::no_operand("nop", op::NOP, sem::nop),
    InstructionDescriptor::no_operand("clc", op::CLC, sem::clc),
    InstructionDescriptor::no_operand("clv", op::CLV, sem::clv),
    InstructionDescriptor::no_operand("clz", op::CLZ, sem::clz),
    InstructionDescriptor::no_operand("cln", op::CLN, sem::cln),
    InstructionDescriptor::no_operand("ccc", op::CCC, sem::ccc),
    InstructionDescriptor::no_operand("sec", op::SEC, sem::sec),
    InstructionDescriptor::no_operand("sev", op::SEV, sem::sev),
    InstructionDescriptor::no_operand("sez", op::SEZ, sem::sez),
    InstructionDescriptor::no_operand("sen", op::SEN, sem::sen),
    InstructionDescriptor::no_operand("scc", op::SCC, sem::scc),
    InstructionDescriptor::single("swab", op::SWAB, sem::swab),
    InstructionDescriptor::single("clr", op::CLR, sem::clr),
    InstructionDescriptor::single("com", op::COM, sem::com),
    InstructionDescriptor::single("inc", op::INC, sem::inc),
    InstructionDescriptor::single("dec", op::DEC, sem::dec),
    InstructionDescriptor::single("neg", op::NEG, sem::neg),
    InstructionDescriptor::single("adc", op::ADC, sem::adc),
    InstructionDescriptor::single("sbc", op::SBC, sem::sbc),
    InstructionDescriptor::single("tst", op::TST, sem::tst),
    InstructionDescriptor::single("ror", op::ROR, sem::ror),
    InstructionDescriptor::single("rol", op::ROL, sem::rol),
    InstructionDescriptor::single("asr", op::ASR, sem::asr),
    InstructionDescriptor::single("asl", op::ASL, sem::asl),
    InstructionDescriptor::branch("br", op::BR, bru::always),
    InstructionDescriptor::branch("bne", op::BNE, bru::not_equal),
    InstructionDescriptor::branch("beq", op::BEQ, bru::equal),
    InstructionDescriptor::branch("bge", op::BGE, bru::greater_or_equal),
    InstructionDescriptor::branch("blt", op::BLT, bru::less_than),
    InstructionDescriptor::branch("bgt", op::BGT, bru::greater_than),
    InstructionDescriptor::branch("ble", op::BLE, bru::less_or_equal),
    InstructionDescriptor::branch("bpl", op::BPL, bru::plus),
    InstructionDescriptor::branch("bmi", op::BMI, bru::minus),
    InstructionDescriptor::branch("bhi", op::BHI, bru::higher),
    InstructionDescriptor::branch("blos", op::BLOS, bru::lower_or_same),
    InstructionDescriptor::branch("bvc", op::BVC, bru::overflow_clear),
    InstructionDescriptor::branch("bvs", op::BVS, bru::overflow_set),
    InstructionDescriptor::branch("bcc", op::BCC, bru::carry_clear),
    InstructionDescriptor::branch("bcs", op::BCS, bru::carry_set),
    InstructionDescriptor::double_reg("xor", op::XOR, sem::xor),
    InstructionDescriptor::double("mov", op::MOV, sem::mov),
    InstructionDescriptor::double("cmp", op::CMP, sem::cmp),
    InstructionDescriptor::double("bit", op::BIT, sem::bit),
    InstructionDescriptor::double("bic", op::BIC, sem::bic),
    InstructionDescriptor::double("bis", op::BIS, sem::bis),
    InstructionDescriptor::double("add", op::ADD, sem::add),
    InstructionDescriptor::double("sub", op::SUB, sem::sub),
];

/// An ordered, immutable list of instruction descriptors.
#[derive(Clone, Copy, Debug)]
pub struct InstructionTable {
    entries: &'static [InstructionDescriptor],
}

impl Default for InstructionTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl InstructionTable {
    /// Wraps a caller-supplied list of descriptors.
    pub const fn new(entries: &'static [InstructionDescriptor]) -> Self {
        Self { entries }
    }

    /// The standard instruction set.
    pub const fn standard() -> Self {
        Self::new(&STANDARD_TABLE)
    }

    /// The descriptors, in match order.
    pub const fn entries(&self) -> &'static [InstructionDescriptor] {
        self.entries
    }

    /// Finds the descriptor for `word`. See [`super::decode::decode`].
    pub fn decode(&self, word: u16) -> Option<&'static InstructionDescriptor> {
        super::decode::decode(self.entries, word)
    }

    /// Looks up a descriptor by mnemonic.
    pub fn by_name(&self, name: &str) -> Option<&'static InstructionDescriptor> {
        self.entries.iter().find(|desc| desc.name == name)
    }
}
