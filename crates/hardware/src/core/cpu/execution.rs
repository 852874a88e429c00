//! Main Execution Loop.
//!
//! This module implements the single-step execution cycle of the CPU. Each step:
//! 1. **Fetch:** Reads the word at the program counter and advances it by one word.
//! 2. **Decode:** Matches the word against the instruction table and extracts operand fields.
//! 3. **Execute:** Resolves operand locations and applies the semantic effect.
//! 4. **Bookkeeping:** Appends the trace entries, stage costs and statistics.
//!
//! An operand that fails to resolve does not abort the step. The effect is skipped,
//! and everything else completes normally.

use tracing::{debug, trace, warn};

use super::Cpu;
use crate::common::constants::WORD_SIZE;
use crate::common::{EmulatorError, MemoryError};
use crate::core::pipeline::{PipelineStage, StepRecord};
use crate::core::units::{agu, bru};
use crate::isa::decode::load_operands;
use crate::isa::disasm::{Extensions, disassemble};
use crate::isa::{Effect, Fields, InstructionDescriptor, OperandSpec};
use crate::soc::Location;

/// Result of a step that did not fail fatally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction was executed.
    Continuing,
    /// The program counter is at or past the end of the loaded program.
    Finished,
}

/// Operands ready to hand to a semantic effect.
#[derive(Clone, Copy, Debug)]
enum Operands {
    None,
    One(Location),
    Two(Location, Location),
    Offset(u8),
}

/// Transient state of the step in flight.
struct StepState {
    pc: u16,
    word: u16,
    desc: &'static InstructionDescriptor,
    fields: Fields,
    ext: Extensions,
    timing: StepRecord,
}

impl Cpu {
    /// Executes exactly one instruction.
    ///
    /// Returns [`StepOutcome::Finished`] without touching any state when the program
    /// counter is at or past the end of the loaded image.
    ///
    /// # Errors
    ///
    /// - [`EmulatorError::Fetch`] if the program counter is outside ROM.
    /// - [`EmulatorError::InvalidOpcode`] if the fetched word matches no table entry.
    ///   The program counter has already moved past the word.
    pub fn step(&mut self) -> Result<StepOutcome, EmulatorError> {
        let pc = self.pc();
        if u32::from(pc) >= self.space.program_end() {
            return Ok(StepOutcome::Finished);
        }

        let mut timing = StepRecord::new();
        let word = self.fetch(pc).inspect_err(|e| debug!(pc, error = %e, "fetch failed"))?;
        let _ = timing.record(PipelineStage::Fetch, self.costs.fetch_ticks);

        let Some(desc) = self.table.decode(word) else {
            self.stats.invalid_opcodes += 1;
            debug!(pc, word, "invalid opcode");
            return Err(EmulatorError::InvalidOpcode { word, pc });
        };
        let fields = load_operands(desc.shape(), word);
        let _ = timing.record(PipelineStage::Decode, self.costs.decode_ticks);

        let mut state = StepState {
            pc,
            word,
            desc,
            fields,
            ext: Extensions::default(),
            timing,
        };
        self.execute(&mut state);
        self.retire(state);
        Ok(StepOutcome::Continuing)
    }

    /// Reads the instruction word at `pc` and advances the program counter.
    fn fetch(&mut self, pc: u16) -> Result<u16, MemoryError> {
        let addr = self.space.fetch_address(pc)?;
        let word = self.space.load_word(addr);
        self.set_pc(pc.wrapping_add(WORD_SIZE));
        Ok(word)
    }

    /// Resolves the operands and applies the semantic effect.
    fn execute(&mut self, state: &mut StepState) {
        let operands = match state.fields {
            Fields::NoOperand => Ok(Operands::None),
            Fields::Single { dst } => self.resolve(dst, &mut state.ext.dst).map(Operands::One),
            Fields::Double { src, dst } => {
                // Both are resolved so the destination's index word is consumed even
                // when the source failed.
                let src = self.resolve(src, &mut state.ext.src);
                let dst = self.resolve(dst, &mut state.ext.dst);
                src.and_then(|src| dst.map(|dst| Operands::Two(src, dst)))
            }
            Fields::Branch { offset } => Ok(Operands::Offset(offset)),
        };

        match operands {
            Ok(operands) => self.apply(state.desc.effect(), operands),
            Err(e) => {
                self.stats.operand_faults += 1;
                warn!(
                    pc = state.pc,
                    word = state.word,
                    mnemonic = state.desc.name(),
                    error = %e,
                    "operand unresolved, effect skipped"
                );
            }
        }
        let _ = state
            .timing
            .record(PipelineStage::Execute, self.costs.execute_ticks);
    }

    /// Resolves one operand, capturing the extension word it consumed, if any.
    fn resolve(&mut self, spec: OperandSpec, ext: &mut Option<u16>) -> Result<Location, MemoryError> {
        let before = self.pc();
        let loc = agu::resolve(&mut self.space, spec.reg, spec.mode);
        if self.pc() == before.wrapping_add(WORD_SIZE) {
            *ext = self.space.read_word_value(before).ok();
        }
        loc
    }

    fn apply(&mut self, effect: Effect, operands: Operands) {
        match (effect, operands) {
            (Effect::NoOperand(f), Operands::None) => f(&mut self.space),
            (Effect::Single(f), Operands::One(dst)) => f(&mut self.space, dst),
            (Effect::Double(f), Operands::Two(src, dst)) => f(&mut self.space, src, dst),
            (Effect::Branch(cond), Operands::Offset(offset)) => {
                if cond(&self.space.registers.psw) {
                    self.set_pc(bru::target(self.pc(), offset));
                    self.stats.branches_taken += 1;
                }
            }
            (effect, operands) => {
                unreachable!("descriptor shape does not fit its effect: {effect:?} / {operands:?}")
            }
        }
    }

    /// Records the trace entries, stage costs and statistics of a completed step.
    fn retire(&mut self, mut state: StepState) {
        let text = disassemble(state.desc, &state.fields, state.ext);
        trace!(pc = state.pc, word = state.word, mnemonic = state.desc.name());
        if self.trace {
            trace!(
                pc = state.pc,
                psw = %self.space.registers.psw,
                next = self.pc(),
                "{text}"
            );
        }
        self.traces.push(text, state.word);

        let _ = state
            .timing
            .record(PipelineStage::MemoryAccess, self.costs.memory_ticks);
        // Write-back shares the memory access tag and replaces its entry.
        let _ = state
            .timing
            .record(PipelineStage::MemoryAccess, self.costs.memory_ticks);
        self.timer.commit(&state.timing);

        self.stats.record_instruction(state.desc.shape());
        self.stats.naive_ticks = self.timer.naive_ticks();
        self.stats.optimized_ticks = self.timer.optimized_ticks();
    }
}
