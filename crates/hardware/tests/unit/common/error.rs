//! Error type tests.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use pdp11_core::common::{EmulatorError, LoadError, MemoryError, Register};

#[test]
fn memory_error_messages_carry_the_address() {
    let err = MemoryError::AddressOutOfRange {
        addr: 0xBFFF,
        limit: 0xC000,
    };
    let msg = err.to_string();
    assert!(msg.contains("0xbfff"), "{msg}");
    assert!(msg.contains("0xc000"), "{msg}");

    let err = MemoryError::DecrementUnderflow { reg: Register::R3 };
    assert!(err.to_string().contains("r3"));
}

#[test]
fn fetch_error_converts_into_emulator_error() {
    let err: EmulatorError = MemoryError::FetchOutOfRange { pc: 0x0010 }.into();
    assert_eq!(
        err,
        EmulatorError::Fetch(MemoryError::FetchOutOfRange { pc: 0x0010 })
    );
    assert!(err.to_string().starts_with("fetch failed"));
}

#[test]
fn invalid_opcode_renders_word_in_octal() {
    let err = EmulatorError::InvalidOpcode {
        word: 0o000007,
        pc: 0x8000,
    };
    let msg = err.to_string();
    assert!(msg.contains("0o0007"), "{msg}");
    assert!(msg.contains("0x8000"), "{msg}");
}

#[test]
fn load_error_chains_io_source() {
    let err = LoadError::Io {
        path: PathBuf::from("missing.bin"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    assert!(err.to_string().contains("missing.bin"));
    let source = err.source().expect("io source is chained");
    assert_eq!(source.to_string(), "no such file");
}

#[test]
fn load_error_too_large_reports_sizes() {
    let err = LoadError::TooLarge {
        len: 0x4001,
        capacity: 0x4000,
    };
    let msg = err.to_string();
    assert!(msg.contains("16385"), "{msg}");
    assert!(msg.contains("16384"), "{msg}");
}
