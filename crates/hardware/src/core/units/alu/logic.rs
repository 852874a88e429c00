//! ALU logical operations.
//!
//! Implements the bitwise family. All of these set `N` and `Z` from the result and
//! clear `V`; `C` is left alone unless stated otherwise.

use super::logic_flags;
use crate::common::Psw;

/// Passes `src` through, setting the condition codes from it.
pub const fn mov(src: u16, psw: &mut Psw) -> u16 {
    logic_flags(psw, src);
    src
}

/// Sets the condition codes for `src & dst` without producing a result.
pub const fn bit(src: u16, dst: u16, psw: &mut Psw) {
    logic_flags(psw, src & dst);
}

/// Clears the bits of `dst` that are set in `src`.
pub const fn bic(src: u16, dst: u16, psw: &mut Psw) -> u16 {
    let result = dst & !src;
    logic_flags(psw, result);
    result
}

/// Sets the bits of `dst` that are set in `src`.
pub const fn bis(src: u16, dst: u16, psw: &mut Psw) -> u16 {
    let result = dst | src;
    logic_flags(psw, result);
    result
}

/// Exclusive or of `src` into `dst`.
pub const fn xor(src: u16, dst: u16, psw: &mut Psw) -> u16 {
    let result = dst ^ src;
    logic_flags(psw, result);
    result
}

/// Produces zero. Clears `N`, `V` and `C` and sets `Z`.
pub const fn clr(psw: &mut Psw) -> u16 {
    logic_flags(psw, 0);
    psw.c = false;
    0
}

/// One's complement. `C` is always set.
pub const fn com(dst: u16, psw: &mut Psw) -> u16 {
    let result = !dst;
    logic_flags(psw, result);
    psw.c = true;
    result
}

/// Sets `N` and `Z` from `dst`, clears `V` and `C`.
pub const fn tst(dst: u16, psw: &mut Psw) {
    logic_flags(psw, dst);
    psw.c = false;
}

/// Swaps the two bytes of `dst`. `N` and `Z` follow the new low byte.
pub const fn swab(dst: u16, psw: &mut Psw) -> u16 {
    let result = dst.swap_bytes();
    let low = result & 0x00FF;
    psw.n = low & 0x0080 != 0;
    psw.z = low == 0;
    psw.v = false;
    psw.c = false;
    result
}
