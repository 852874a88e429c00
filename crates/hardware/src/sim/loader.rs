//! Program Image Loader.
//!
//! This module loads raw program images from disk. It performs:
//! 1. **Binary loading:** Reads an image file into a byte buffer.
//! 2. **ROM setup:** Copies the image into ROM and points the program counter at
//!    the ROM base, ready for the first step.
//!
//! An image is loaded verbatim: there is no header and no relocation.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{LoadError, ROM_BASE};
use crate::core::Cpu;

/// Loads a binary file from disk into a byte vector.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the image at `path` into ROM and sets the program counter to the ROM base.
///
/// On failure the CPU is left untouched.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and [`LoadError::TooLarge`]
/// if it does not fit into ROM.
pub fn load_rom_file(cpu: &mut Cpu, path: impl AsRef<Path>) -> Result<(), LoadError> {
    let path = path.as_ref();
    let image = load_binary(path)?;
    cpu.load_rom(&image)?;
    cpu.set_pc(ROM_BASE);
    debug!(path = %path.display(), len = image.len(), "program image ready");
    Ok(())
}
