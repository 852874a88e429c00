//! The Address Space.
//!
//! This module owns all architectural storage of the machine. It provides:
//! 1. **Regions:** RAM, video memory and ROM laid out back to back in one flat
//!    16-bit space (`RAM_BASE`, `VIDEO_BASE`, `ROM_BASE`).
//! 2. **Word Access:** Bounds-checked word handles used for instruction fetch and
//!    operand resolution.
//! 3. **Registers:** The register file and processor status word.
//! 4. **Snapshots:** Read-only copies of the video and ROM regions for observers.

/// Fixed-size byte storage with little-endian word access.
pub mod buffer;

use tracing::debug;

use self::buffer::MemoryBuffer;
use super::location::Location;
use crate::common::constants::{ADDRESS_SPACE_SIZE, ROM_SIZE, VIDEO_SIZE, WORD_SIZE};
use crate::common::{
    Flag, LoadError, MemoryError, ROM_BASE, Register, RegisterFile, VIDEO_BASE, WordAddr,
};

/// Registers plus the three contiguous memory regions.
#[derive(Clone, Debug)]
pub struct AddressSpace {
    /// General registers and condition codes.
    pub registers: RegisterFile,
    memory: MemoryBuffer,
    rom_len: usize,
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressSpace {
    /// Creates a zeroed address space with an empty ROM.
    pub fn new() -> Self {
        Self {
            registers: RegisterFile::new(),
            memory: MemoryBuffer::new(ADDRESS_SPACE_SIZE),
            rom_len: 0,
        }
    }

    /// Copies a program image into ROM starting at `ROM_BASE`.
    ///
    /// Bytes of ROM past the image are cleared. On failure nothing is modified.
    pub fn init(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > ROM_SIZE {
            return Err(LoadError::TooLarge {
                len: image.len(),
                capacity: ROM_SIZE,
            });
        }
        let base = ROM_BASE as usize;
        self.memory.write_slice(base, image);
        self.memory.clear(base + image.len(), ROM_SIZE - image.len());
        self.rom_len = image.len();
        debug!(len = image.len(), base = ROM_BASE, "loaded ROM image");
        Ok(())
    }

    /// Length of the loaded program image in bytes.
    pub const fn rom_len(&self) -> usize {
        self.rom_len
    }

    /// First address past the loaded program image.
    pub const fn program_end(&self) -> u32 {
        ROM_BASE as u32 + self.rom_len as u32
    }

    /// Returns a handle to the word at `addr`.
    ///
    /// Fails if either byte of the word lies outside the address space.
    pub const fn read_word_address(&self, addr: u16) -> Result<WordAddr, MemoryError> {
        if addr as usize + 1 >= ADDRESS_SPACE_SIZE {
            return Err(MemoryError::AddressOutOfRange {
                addr: addr as u32,
                limit: ADDRESS_SPACE_SIZE as u32,
            });
        }
        Ok(WordAddr::new_checked(addr))
    }

    /// Reads the word at `addr`, with the same bounds contract as
    /// [`read_word_address`](Self::read_word_address).
    pub fn read_word_value(&self, addr: u16) -> Result<u16, MemoryError> {
        self.read_word_address(addr).map(|word| self.load_word(word))
    }

    /// Returns a handle to the instruction word at `pc`.
    ///
    /// Instruction fetches are confined to the ROM region and must be word aligned.
    pub const fn fetch_address(&self, pc: u16) -> Result<WordAddr, MemoryError> {
        if pc < ROM_BASE || pc as usize + 1 >= ADDRESS_SPACE_SIZE {
            return Err(MemoryError::FetchOutOfRange { pc });
        }
        if pc % WORD_SIZE != 0 {
            return Err(MemoryError::MisalignedFetch { pc });
        }
        Ok(WordAddr::new_checked(pc))
    }

    /// Reads the word behind a checked handle.
    #[inline]
    pub fn load_word(&self, addr: WordAddr) -> u16 {
        self.memory.read_u16(addr.offset())
    }

    /// Writes the word behind a checked handle.
    #[inline]
    pub fn store_word(&mut self, addr: WordAddr, val: u16) {
        self.memory.write_u16(addr.offset(), val);
    }

    /// Reads an operand from its resolved location.
    pub fn load(&self, loc: Location) -> u16 {
        match loc {
            Location::Register(reg) => self.registers.read(reg),
            Location::Memory(addr) => self.load_word(addr),
        }
    }

    /// Writes an operand to its resolved location.
    pub fn store(&mut self, loc: Location, val: u16) {
        match loc {
            Location::Register(reg) => self.registers.write(reg, val),
            Location::Memory(addr) => self.store_word(addr, val),
        }
    }

    /// Reads the word at the program counter and advances it by one word.
    pub fn next_word(&mut self) -> Result<u16, MemoryError> {
        let pc = self.registers.pc();
        let val = self.read_word_value(pc)?;
        self.registers.set_pc(pc.wrapping_add(WORD_SIZE));
        Ok(val)
    }

    /// Read-only view of the video region.
    pub fn video(&self) -> &[u8] {
        self.memory.read_slice(VIDEO_BASE as usize, VIDEO_SIZE)
    }

    /// Copies up to `buf.len()` bytes of video memory into `buf`.
    ///
    /// Returns the number of bytes written.
    pub fn video_snapshot(&self, buf: &mut [u8]) -> usize {
        let len = buf.len().min(VIDEO_SIZE);
        buf[..len].copy_from_slice(self.memory.read_slice(VIDEO_BASE as usize, len));
        len
    }

    /// Copies up to `buf.len()` bytes of ROM into `buf`.
    ///
    /// Returns the number of bytes written.
    pub fn rom_snapshot(&self, buf: &mut [u8]) -> usize {
        let len = buf.len().min(ROM_SIZE);
        buf[..len].copy_from_slice(self.memory.read_slice(ROM_BASE as usize, len));
        len
    }

    /// Zeroes the video region.
    pub fn clear_video(&mut self) {
        self.memory.clear(VIDEO_BASE as usize, VIDEO_SIZE);
    }

    /// Clears all registers and condition codes.
    pub fn reset_registers(&mut self) {
        self.registers.reset();
    }

    /// Reads a register.
    pub const fn register(&self, reg: Register) -> u16 {
        self.registers.read(reg)
    }

    /// Writes a register.
    pub const fn set_register(&mut self, reg: Register, val: u16) {
        self.registers.write(reg, val);
    }

    /// Reads a condition code.
    pub const fn flag(&self, flag: Flag) -> bool {
        self.registers.psw.get(flag)
    }

    /// Writes a condition code.
    pub const fn set_flag(&mut self, flag: Flag, val: bool) {
        self.registers.psw.set(flag, val);
    }
}
