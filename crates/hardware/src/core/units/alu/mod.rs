//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 16-bit integer ALU used by the instruction semantics.
//! Every operation takes its operand values plus the processor status word, returns
//! the result, and updates the condition codes the way the PDP-11 handbook specifies
//! for the corresponding mnemonic.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Cmp, Inc, Dec, Neg, Adc, Sbc
//! - [`logic`]:      Mov, Bit, Bic, Bis, Xor, Clr, Com, Tst, Swab
//! - [`shifts`]:     Ror, Rol, Asr, Asl
//!
//! # Examples
//!
//! ```
//! use pdp11_core::common::Psw;
//! use pdp11_core::core::units::alu::arithmetic;
//!
//! let mut psw = Psw::default();
//! assert_eq!(arithmetic::add(1, 0xFFFF, &mut psw), 0);
//! assert!(psw.z && psw.c && !psw.v);
//! ```

/// Word arithmetic (add, subtract, compare, increment, negate, carry propagation).
pub mod arithmetic;

/// Bitwise operations (move, bit test/clear/set, exclusive or, complement).
pub mod logic;

/// Rotates and arithmetic shifts by one bit.
pub mod shifts;

use crate::common::Psw;
use crate::common::constants::SIGN_BIT;

/// Returns `true` if the sign bit of `val` is set.
#[inline(always)]
pub(crate) const fn is_negative(val: u16) -> bool {
    val & SIGN_BIT != 0
}

/// Sets `N` and `Z` from `result` and clears `V`, leaving `C` alone.
#[inline]
pub(crate) const fn logic_flags(psw: &mut Psw, result: u16) {
    psw.set_nz(result);
    psw.v = false;
}

/// Sets `N`, `Z` and `C` from a shifted result and derives `V = N xor C`.
#[inline]
pub(crate) const fn shift_flags(psw: &mut Psw, result: u16, carry: bool) {
    psw.set_nz(result);
    psw.c = carry;
    psw.v = psw.n ^ psw.c;
}
