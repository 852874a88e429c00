//! Memory buffer tests.

use pdp11_core::soc::memory::buffer::MemoryBuffer;

#[test]
fn new_buffer_is_zeroed() {
    let buf = MemoryBuffer::new(16);
    assert_eq!(buf.len(), 16);
    assert!(!buf.is_empty());
    assert!(buf.read_slice(0, 16).iter().all(|&b| b == 0));
}

#[test]
fn words_are_little_endian() {
    let mut buf = MemoryBuffer::new(8);
    buf.write_u16(2, 0xBEEF);
    assert_eq!(buf.read_slice(2, 2), &[0xEF, 0xBE]);
    assert_eq!(buf.read_u16(2), 0xBEEF);
}

#[test]
fn unaligned_words_overlap() {
    let mut buf = MemoryBuffer::new(8);
    buf.write_slice(0, &[0x11, 0x22, 0x33, 0x44]);
    assert_eq!(buf.read_u16(1), 0x3322);
}

#[test]
fn clear_zeroes_only_the_range() {
    let mut buf = MemoryBuffer::new(6);
    buf.write_slice(0, &[1, 2, 3, 4, 5, 6]);
    buf.clear(2, 2);
    assert_eq!(buf.read_slice(0, 6), &[1, 2, 0, 0, 5, 6]);
}
