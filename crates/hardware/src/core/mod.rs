//! Core processor implementation.
//!
//! This module contains the execution engine and everything it drives each step:
//! the addressing modes, the execution units and the pipeline timing model.

/// Architecture definitions (addressing modes).
pub mod arch;

/// CPU core implementation and the single-step execution loop.
pub mod cpu;

/// Pipeline timing model (stage tags, per-step records, tick counters).
pub mod pipeline;

/// Execution units (address generation, ALU, branch resolution).
pub mod units;

pub use self::cpu::{Cpu, StepOutcome};
