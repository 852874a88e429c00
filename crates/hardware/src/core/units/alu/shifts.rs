//! ALU shift operations.
//!
//! One-bit rotates through carry and arithmetic shifts. In each case the bit
//! shifted out lands in `C` and `V` is `N xor C` after the shift.

use super::{is_negative, shift_flags};
use crate::common::Psw;

/// Rotate right through the carry bit.
pub const fn ror(dst: u16, psw: &mut Psw) -> u16 {
    let result = (dst >> 1) | ((psw.c as u16) << 15);
    shift_flags(psw, result, dst & 1 != 0);
    result
}

/// Rotate left through the carry bit.
pub const fn rol(dst: u16, psw: &mut Psw) -> u16 {
    let result = (dst << 1) | (psw.c as u16);
    shift_flags(psw, result, is_negative(dst));
    result
}

/// Arithmetic shift right; the sign bit is replicated.
pub const fn asr(dst: u16, psw: &mut Psw) -> u16 {
    let result = ((dst as i16) >> 1) as u16;
    shift_flags(psw, result, dst & 1 != 0);
    result
}

/// Arithmetic shift left; zero enters bit 0.
pub const fn asl(dst: u16, psw: &mut Psw) -> u16 {
    let result = dst << 1;
    shift_flags(psw, result, is_negative(dst));
    result
}
