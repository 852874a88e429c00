//! Address Generation Unit (AGU).
//!
//! Turns a (register, addressing mode) pair into the location of an operand. It performs:
//! 1. **Indirection:** Up to two levels of memory indirection for the deferred modes.
//! 2. **Side Effects:** Auto-increment/decrement of the register and consumption of
//!    index words from the instruction stream.
//! 3. **Rollback:** An auto-decrement is undone when the rest of the resolution fails.
//!
//! Every failure is a [`MemoryError`]. The execution engine treats it as a missing
//! operand rather than a fatal condition.

use crate::common::constants::WORD_SIZE;
use crate::common::{MemoryError, Register};
use crate::core::arch::AddressingMode;
use crate::soc::{AddressSpace, Location};

/// Amount auto-increment and auto-decrement modes move a register by.
const STEP: i16 = WORD_SIZE as i16;

/// Resolves the operand selected by `reg` and `mode`.
///
/// Register side effects are committed only as listed per mode:
/// - auto-increment variants increment only after the location resolved, except
///   absolute mode on `pc`, which consumes its address word once it was read;
/// - auto-decrement variants decrement first and restore the register on failure;
/// - index variants advance the program counter past the index word once it was read,
///   even if the final address is out of range.
pub fn resolve(
    space: &mut AddressSpace,
    reg: Register,
    mode: AddressingMode,
) -> Result<Location, MemoryError> {
    match mode {
        AddressingMode::Register => Ok(Location::Register(reg)),

        AddressingMode::RegisterDeferred => {
            let addr = space.read_word_address(space.register(reg))?;
            Ok(Location::Memory(addr))
        }

        AddressingMode::AutoIncrement => {
            let addr = space.read_word_address(space.register(reg))?;
            let _ = space.registers.adjust(reg, STEP);
            Ok(Location::Memory(addr))
        }

        // Absolute: the address word belongs to the instruction stream and is
        // consumed even when it points outside the address space.
        AddressingMode::AutoIncrementDeferred if reg == Register::Pc => {
            let pointer = space.next_word()?;
            Ok(Location::Memory(space.read_word_address(pointer)?))
        }

        AddressingMode::AutoIncrementDeferred => {
            let pointer = space.read_word_value(space.register(reg))?;
            let addr = space.read_word_address(pointer)?;
            let _ = space.registers.adjust(reg, STEP);
            Ok(Location::Memory(addr))
        }

        AddressingMode::AutoDecrement => {
            let value = pre_decrement(space, reg)?;
            match space.read_word_address(value) {
                Ok(addr) => Ok(Location::Memory(addr)),
                Err(e) => {
                    let _ = space.registers.adjust(reg, STEP);
                    Err(e)
                }
            }
        }

        AddressingMode::AutoDecrementDeferred => {
            let value = pre_decrement(space, reg)?;
            let resolved = space
                .read_word_value(value)
                .and_then(|pointer| space.read_word_address(pointer));
            match resolved {
                Ok(addr) => Ok(Location::Memory(addr)),
                Err(e) => {
                    let _ = space.registers.adjust(reg, STEP);
                    Err(e)
                }
            }
        }

        AddressingMode::Index => {
            let addr = indexed_address(space, reg)?;
            Ok(Location::Memory(space.read_word_address(addr)?))
        }

        AddressingMode::IndexDeferred => {
            let addr = indexed_address(space, reg)?;
            let pointer = space.read_word_value(addr)?;
            Ok(Location::Memory(space.read_word_address(pointer)?))
        }
    }
}

/// Decrements `reg` by one word and returns its new value.
///
/// Fails without touching the register if the value would drop below zero.
fn pre_decrement(space: &mut AddressSpace, reg: Register) -> Result<u16, MemoryError> {
    if space.register(reg) < WORD_SIZE {
        return Err(MemoryError::DecrementUnderflow { reg });
    }
    Ok(space.registers.adjust(reg, -STEP))
}

/// Consumes the index word following the instruction and adds it to `reg`.
///
/// The register is read after the program counter moved, so `pc`-relative
/// operands are relative to the word following the index.
fn indexed_address(space: &mut AddressSpace, reg: Register) -> Result<u16, MemoryError> {
    let index = space.next_word()?;
    Ok(space.register(reg).wrapping_add(index))
}
