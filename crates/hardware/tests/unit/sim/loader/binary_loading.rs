//! Image loader tests.

use std::io::Write;

use pdp11_core::common::{LoadError, ROM_BASE, ROM_SIZE, Register};
use pdp11_core::core::{Cpu, StepOutcome};
use pdp11_core::isa::opcodes;
use pdp11_core::sim::loader::{load_binary, load_rom_file};
use tempfile::NamedTempFile;

use crate::common::{image, reg, single};

fn image_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn load_binary_reads_the_whole_file() {
    let file = image_file(&[1, 2, 3]);
    assert_eq!(load_binary(file.path()).unwrap(), vec![1, 2, 3]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bin");

    let err = load_binary(&path).unwrap_err();
    assert!(matches!(&err, LoadError::Io { path: p, .. } if *p == path));
    assert!(err.to_string().contains("missing.bin"));
}

#[test]
fn load_rom_file_points_pc_at_rom() {
    let file = image_file(&image(&[single(opcodes::INC, reg(Register::R4))]));
    let mut cpu = Cpu::default();

    load_rom_file(&mut cpu, file.path()).unwrap();
    assert_eq!(cpu.pc(), ROM_BASE);
    assert_eq!(cpu.space.rom_len(), 2);

    assert_eq!(cpu.step(), Ok(StepOutcome::Continuing));
    assert_eq!(cpu.register(Register::R4), 1);
    assert_eq!(cpu.step(), Ok(StepOutcome::Finished));
}

#[test]
fn oversized_file_leaves_cpu_untouched() {
    let file = image_file(&vec![0xAA; ROM_SIZE + 1]);
    let mut cpu = Cpu::default();
    cpu.set_register(Register::R0, 5);

    let err = load_rom_file(&mut cpu, file.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::TooLarge { len, capacity } if len == ROM_SIZE + 1 && capacity == ROM_SIZE
    ));
    assert_eq!(cpu.pc(), 0);
    assert_eq!(cpu.register(Register::R0), 5);
    assert_eq!(cpu.space.rom_len(), 0);
}

#[test]
fn exactly_full_rom_is_accepted() {
    let file = image_file(&vec![0; ROM_SIZE]);
    let mut cpu = Cpu::default();

    load_rom_file(&mut cpu, file.path()).unwrap();
    assert_eq!(cpu.space.rom_len(), ROM_SIZE);
}
