//! Error definitions.
//!
//! This module defines the failure modes of the emulator. It provides:
//! 1. **Memory Errors:** Out-of-range or misaligned accesses and auto-decrement underflow.
//! 2. **Load Errors:** Images that cannot be read or do not fit into ROM.
//! 3. **Step Errors:** Conditions fatal to the current instruction (bad fetch, unknown opcode).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::reg::Register;

/// A failed access to the address space.
///
/// During operand resolution these are recoverable: the operand is treated as absent
/// and the instruction's effect is skipped for the step.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    /// A word access touched a byte past the end of the address space.
    #[error("word access at {addr:#06x} is outside the address space (limit {limit:#06x})")]
    AddressOutOfRange {
        /// Address of the first byte of the word.
        addr: u32,
        /// Length of the address space.
        limit: u32,
    },

    /// An instruction fetch outside the ROM region.
    #[error("instruction fetch at {pc:#06x} is outside ROM")]
    FetchOutOfRange {
        /// Program counter at the time of the fetch.
        pc: u16,
    },

    /// An instruction fetch from an odd address.
    #[error("instruction fetch at {pc:#06x} is not word aligned")]
    MisalignedFetch {
        /// Program counter at the time of the fetch.
        pc: u16,
    },

    /// An auto-decrement would move a register below zero.
    #[error("auto-decrement of {reg} would underflow below zero")]
    DecrementUnderflow {
        /// The register being decremented.
        reg: Register,
    },
}

/// A failure to load a program image into ROM.
///
/// The address space is left exactly as it was before the load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image is larger than the ROM region.
    #[error("image of {len} bytes exceeds ROM capacity of {capacity} bytes")]
    TooLarge {
        /// Length of the rejected image.
        len: usize,
        /// Capacity of the ROM region.
        capacity: usize,
    },

    /// The image file could not be read.
    #[error("could not read image '{}'", path.display())]
    Io {
        /// Path of the image file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// A condition fatal to the current step.
///
/// The program counter has already moved past the offending word when this is returned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EmulatorError {
    /// The fetched word matches no entry of the instruction table.
    #[error("invalid opcode {word:#06o} at {pc:#06x}")]
    InvalidOpcode {
        /// The fetched instruction word.
        word: u16,
        /// Address the word was fetched from.
        pc: u16,
    },

    /// The instruction fetch itself failed.
    #[error("fetch failed: {0}")]
    Fetch(#[from] MemoryError),
}
