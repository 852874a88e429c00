//! Register File.
//!
//! This module provides the architectural register state of the processor. It provides:
//! 1. **Identifiers:** `Register` (`r0`-`r7`) and `Flag` (`N`, `Z`, `V`, `C`) enums.
//! 2. **Storage:** A fixed-size array of eight 16-bit registers and the processor status word.
//! 3. **Observability:** Debugging utilities for dumping register state during emulation.

use std::fmt;

use super::constants::REGISTER_COUNT;

/// A general purpose register identifier.
///
/// `r6` doubles as the stack pointer and `r7` as the program counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Register {
    /// General register 0.
    R0 = 0,
    /// General register 1.
    R1 = 1,
    /// General register 2.
    R2 = 2,
    /// General register 3.
    R3 = 3,
    /// General register 4.
    R4 = 4,
    /// General register 5.
    R5 = 5,
    /// Stack pointer (`r6`).
    Sp = 6,
    /// Program counter (`r7`).
    Pc = 7,
}

impl Register {
    /// All registers in index order.
    pub const ALL: [Self; REGISTER_COUNT] = [
        Self::R0,
        Self::R1,
        Self::R2,
        Self::R3,
        Self::R4,
        Self::R5,
        Self::Sp,
        Self::Pc,
    ];

    /// Returns the register with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..8`. Decoded register fields are three bits wide,
    /// so an out-of-range index is a programming error.
    pub fn from_index(idx: usize) -> Self {
        assert!(idx < REGISTER_COUNT, "register index {idx} out of range");
        Self::ALL[idx]
    }

    /// Returns the index of the register (0-7).
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the assembler name of the register.
    pub const fn name(self) -> &'static str {
        match self {
            Self::R0 => "r0",
            Self::R1 => "r1",
            Self::R2 => "r2",
            Self::R3 => "r3",
            Self::R4 => "r4",
            Self::R5 => "r5",
            Self::Sp => "sp",
            Self::Pc => "pc",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A condition code in the processor status word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Negative: result sign bit was set.
    N,
    /// Zero: result was zero.
    Z,
    /// Overflow: signed arithmetic overflowed.
    V,
    /// Carry: unsigned carry or borrow out of bit 15.
    C,
}

impl Flag {
    /// All flags in `N Z V C` order.
    pub const ALL: [Self; 4] = [Self::N, Self::Z, Self::V, Self::C];
}

/// Processor status word: the four condition codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Psw {
    /// Negative flag.
    pub n: bool,
    /// Zero flag.
    pub z: bool,
    /// Overflow flag.
    pub v: bool,
    /// Carry flag.
    pub c: bool,
}

impl Psw {
    /// Reads a single condition code.
    pub const fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::N => self.n,
            Flag::Z => self.z,
            Flag::V => self.v,
            Flag::C => self.c,
        }
    }

    /// Writes a single condition code.
    pub const fn set(&mut self, flag: Flag, val: bool) {
        match flag {
            Flag::N => self.n = val,
            Flag::Z => self.z = val,
            Flag::V => self.v = val,
            Flag::C => self.c = val,
        }
    }

    /// Sets `N` and `Z` from a 16-bit result.
    #[inline]
    pub const fn set_nz(&mut self, result: u16) {
        self.n = result & 0x8000 != 0;
        self.z = result == 0;
    }
}

impl fmt::Display for Psw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            bit(self.n, 'N'),
            bit(self.z, 'Z'),
            bit(self.v, 'V'),
            bit(self.c, 'C')
        )
    }
}

/// The eight general registers plus the processor status word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u16; REGISTER_COUNT],
    /// Condition codes.
    pub psw: Psw,
}

impl RegisterFile {
    /// Creates a new register file with all registers and flags cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    #[inline(always)]
    pub const fn read(&self, reg: Register) -> u16 {
        self.regs[reg.index()]
    }

    /// Writes a register.
    #[inline(always)]
    pub const fn write(&mut self, reg: Register, val: u16) {
        self.regs[reg.index()] = val;
    }

    /// Adds a signed amount to a register, wrapping at 16 bits.
    ///
    /// Returns the new register value.
    #[inline]
    pub const fn adjust(&mut self, reg: Register, delta: i16) -> u16 {
        let val = self.regs[reg.index()].wrapping_add_signed(delta);
        self.regs[reg.index()] = val;
        val
    }

    /// Returns the program counter.
    #[inline(always)]
    pub const fn pc(&self) -> u16 {
        self.read(Register::Pc)
    }

    /// Sets the program counter.
    #[inline(always)]
    pub const fn set_pc(&mut self, val: u16) {
        self.write(Register::Pc, val);
    }

    /// Clears every register and condition code.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Displays registers in pairs with octal formatting for debugging purposes.
    pub fn dump(&self) {
        for pair in Register::ALL.chunks(2) {
            println!(
                "{:<2}={:06o} {:<2}={:06o}",
                pair[0].name(),
                self.read(pair[0]),
                pair[1].name(),
                self.read(pair[1])
            );
        }
        println!("psw={}", self.psw);
    }
}
