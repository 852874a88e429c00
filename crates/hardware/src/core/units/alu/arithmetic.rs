//! ALU arithmetic operations.
//!
//! Implements word addition, subtraction, comparison and the single-operand
//! arithmetic family. All results wrap at 16 bits; `C` records the unsigned
//! carry (or borrow) and `V` the signed overflow.

use super::is_negative;
use crate::common::Psw;

/// `dst + src`.
pub const fn add(src: u16, dst: u16, psw: &mut Psw) -> u16 {
    let (result, carry) = dst.overflowing_add(src);
    psw.set_nz(result);
    psw.v = is_negative(!(src ^ dst) & (src ^ result));
    psw.c = carry;
    result
}

/// `dst - src`. `C` is set when a borrow occurred.
pub const fn sub(src: u16, dst: u16, psw: &mut Psw) -> u16 {
    let (result, borrow) = dst.overflowing_sub(src);
    psw.set_nz(result);
    psw.v = is_negative((src ^ dst) & (dst ^ result));
    psw.c = borrow;
    result
}

/// Sets the condition codes for `src - dst` without producing a result.
pub const fn cmp(src: u16, dst: u16, psw: &mut Psw) {
    let (result, borrow) = src.overflowing_sub(dst);
    psw.set_nz(result);
    psw.v = is_negative((src ^ dst) & (src ^ result));
    psw.c = borrow;
}

/// `dst + 1`. `C` is not affected.
pub const fn inc(dst: u16, psw: &mut Psw) -> u16 {
    let result = dst.wrapping_add(1);
    psw.set_nz(result);
    psw.v = dst == 0o077777;
    result
}

/// `dst - 1`. `C` is not affected.
pub const fn dec(dst: u16, psw: &mut Psw) -> u16 {
    let result = dst.wrapping_sub(1);
    psw.set_nz(result);
    psw.v = dst == 0o100000;
    result
}

/// Two's complement negation.
pub const fn neg(dst: u16, psw: &mut Psw) -> u16 {
    let result = dst.wrapping_neg();
    psw.set_nz(result);
    psw.v = result == 0o100000;
    psw.c = result != 0;
    result
}

/// Adds the carry bit into `dst`.
pub const fn adc(dst: u16, psw: &mut Psw) -> u16 {
    let carry = psw.c;
    let result = dst.wrapping_add(carry as u16);
    psw.set_nz(result);
    psw.v = dst == 0o077777 && carry;
    psw.c = dst == 0o177777 && carry;
    result
}

/// Subtracts the carry bit from `dst`. `C` is set when the borrow propagates out.
pub const fn sbc(dst: u16, psw: &mut Psw) -> u16 {
    let carry = psw.c;
    let result = dst.wrapping_sub(carry as u16);
    psw.set_nz(result);
    psw.v = dst == 0o100000;
    psw.c = dst == 0 && carry;
    result
}
