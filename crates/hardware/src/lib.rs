//! PDP-11 style 16-bit emulator library.
//!
//! This crate implements a single-step emulator of a PDP-11 style word machine with the following:
//! 1. **Core:** The execution engine, addressing modes and the pipeline timing model.
//! 2. **Memory:** One flat address space of RAM, video memory and ROM, plus the register file.
//! 3. **ISA:** The instruction table, decoding, semantic effects and disassembly.
//! 4. **Simulation:** Image loading, trace buffers, configuration and statistics.
//!
//! # Example
//!
//! ```
//! use pdp11_core::common::{ROM_BASE, Register};
//! use pdp11_core::{Config, Cpu, StepOutcome};
//!
//! // inc r0; halt
//! let image = [0o005200u16, 0o000000]
//!     .iter()
//!     .flat_map(|w| w.to_le_bytes())
//!     .collect::<Vec<u8>>();
//!
//! let mut cpu = Cpu::new(&Config::default());
//! cpu.load_rom(&image).unwrap();
//! cpu.set_pc(ROM_BASE);
//! while cpu.step().unwrap() == StepOutcome::Continuing {}
//!
//! assert_eq!(cpu.register(Register::R0), 1);
//! assert_eq!(cpu.disassembly(), vec!["inc r0", "halt"]);
//! ```

/// Common types and constants (addresses, registers, errors).
pub mod common;
/// Emulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (execution engine, addressing, units, pipeline timing).
pub mod core;
/// Instruction set (opcodes, table, decode, semantics, disassembly).
pub mod isa;
/// Image loader and trace buffers.
pub mod sim;
/// Machine storage (address space and operand locations).
pub mod soc;
/// Emulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main CPU type; owns the address space, traces and timing model.
pub use crate::core::Cpu;
/// Outcome of a successful step.
pub use crate::core::StepOutcome;
