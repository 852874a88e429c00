//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the execution engine that owns the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Owns the address space (registers, flags and memory).
//! 2. **Decoding:** Holds the instruction table every fetched word is matched against.
//! 3. **Timing:** Feeds per-step stage costs into the pipeline timing model.
//! 4. **Observability:** Keeps the disassembly and byte traces and run statistics.
//!
//! There is no global instance. Whoever drives stepping constructs and owns a `Cpu`.

/// The single-step execution loop.
pub mod execution;

pub use execution::StepOutcome;

use tracing::debug;

use crate::common::{Flag, LoadError, Psw, Register};
use crate::config::{Config, PipelineConfig};
use crate::core::pipeline::PipelineTimer;
use crate::isa::InstructionTable;
use crate::sim::TraceLog;
use crate::soc::AddressSpace;
use crate::stats::SimStats;

/// The execution engine.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Registers, condition codes and memory.
    pub space: AddressSpace,
    /// Instruction table used for decoding.
    table: InstructionTable,
    /// Cumulative naive and optimized tick counters.
    timer: PipelineTimer,
    /// Per-stage costs charged each step.
    costs: PipelineConfig,
    /// Disassembly and byte traces.
    traces: TraceLog,
    /// Run statistics.
    pub stats: SimStats,
    /// Emit a detailed `tracing` event for every step.
    pub trace: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Cpu {
    /// Creates a CPU decoding the standard instruction set.
    ///
    /// The program counter is zero; load an image and position it before stepping.
    pub fn new(config: &Config) -> Self {
        Self::with_table(config, InstructionTable::standard())
    }

    /// Creates a CPU decoding with a caller-supplied instruction table.
    pub fn with_table(config: &Config, table: InstructionTable) -> Self {
        Self {
            space: AddressSpace::new(),
            table,
            timer: PipelineTimer::new(),
            costs: config.pipeline,
            traces: TraceLog::new(config.general.trace_depth),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Copies a program image into ROM.
    ///
    /// The program counter is not moved; set it to
    /// [`ROM_BASE`](crate::common::ROM_BASE) before stepping.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image does not fit. Nothing is modified
    /// in that case.
    pub fn load_rom(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.space.init(image)
    }

    /// Returns the machine to its power-on state.
    ///
    /// Registers, flags and every memory region are cleared, including the loaded
    /// ROM image. Pipeline history, traces and statistics are discarded.
    pub fn reset(&mut self) {
        self.space = AddressSpace::new();
        self.timer.reset();
        self.traces.clear();
        self.stats = SimStats::default();
        debug!("cpu reset");
    }

    /// Reads a register.
    pub const fn register(&self, reg: Register) -> u16 {
        self.space.register(reg)
    }

    /// Writes a register.
    pub const fn set_register(&mut self, reg: Register, val: u16) {
        self.space.set_register(reg, val);
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> u16 {
        self.space.registers.pc()
    }

    /// Sets the program counter.
    pub const fn set_pc(&mut self, pc: u16) {
        self.space.registers.set_pc(pc);
    }

    /// Reads a condition code.
    pub const fn flag(&self, flag: Flag) -> bool {
        self.space.flag(flag)
    }

    /// Returns all four condition codes.
    pub const fn psw(&self) -> Psw {
        self.space.registers.psw
    }

    /// Copies up to `buf.len()` bytes of video memory into `buf`, returning the count.
    pub fn video_snapshot(&self, buf: &mut [u8]) -> usize {
        self.space.video_snapshot(buf)
    }

    /// Copies up to `buf.len()` bytes of ROM into `buf`, returning the count.
    pub fn rom_snapshot(&self, buf: &mut [u8]) -> usize {
        self.space.rom_snapshot(buf)
    }

    /// Every retained disassembly line, oldest first.
    pub fn disassembly(&self) -> Vec<String> {
        self.traces.disassembly.all()
    }

    /// The last `n` disassembly lines, oldest first.
    pub fn disassembly_last(&self, n: usize) -> Vec<String> {
        self.traces.disassembly.last(n)
    }

    /// Every retained fetched word as hex text, oldest first.
    pub fn byte_trace(&self) -> Vec<String> {
        self.traces.bytes.all()
    }

    /// The last `n` fetched words as hex text, oldest first.
    pub fn byte_trace_last(&self, n: usize) -> Vec<String> {
        self.traces.bytes.last(n)
    }

    /// Both trace buffers.
    pub const fn traces(&self) -> &TraceLog {
        &self.traces
    }

    /// Cumulative ticks with no stage overlap.
    pub const fn naive_ticks(&self) -> u64 {
        self.timer.naive_ticks()
    }

    /// Cumulative ticks with pipelined stage overlap.
    pub const fn optimized_ticks(&self) -> u64 {
        self.timer.optimized_ticks()
    }

    /// The pipeline timing model.
    pub const fn timer(&self) -> &PipelineTimer {
        &self.timer
    }

    /// Run statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// The instruction table in use.
    pub const fn table(&self) -> &InstructionTable {
        &self.table
    }

    /// Dumps the program counter and registers to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:06o}", self.pc());
        self.space.registers.dump();
    }
}
