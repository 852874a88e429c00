//! Execution units.
//!
//! This module contains the functional units the execution engine drives each step:
//! the address generation unit that resolves addressing modes, the ALU, and the
//! branch resolution unit.

/// Address Generation Unit: addressing-mode resolution.
pub mod agu;

/// Arithmetic Logic Unit for 16-bit integer operations.
pub mod alu;

/// Branch Resolution Unit: branch predicates and targets.
pub mod bru;
