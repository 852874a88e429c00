//! Branch Resolution Unit (BRU).
//!
//! Evaluates conditional-branch predicates against the processor status word and
//! computes branch targets. There is no prediction: every branch is resolved in the
//! step that executes it.
//!
//! The displacement is an unsigned eight-bit word count. It is not sign-extended,
//! so every taken branch moves the program counter forward (modulo 2^16).

use crate::common::Psw;
use crate::common::constants::WORD_SIZE;

/// A branch predicate over the condition codes.
pub type Condition = fn(&Psw) -> bool;

/// Returns the program counter after taking a branch with displacement `offset`.
#[inline]
pub const fn target(pc: u16, offset: u8) -> u16 {
    pc.wrapping_add((offset as u16).wrapping_mul(WORD_SIZE))
}

/// `BR`: always taken.
pub const fn always(_psw: &Psw) -> bool {
    true
}

/// `BNE`: `Z = 0`.
pub const fn not_equal(psw: &Psw) -> bool {
    !psw.z
}

/// `BEQ`: `Z = 1`.
pub const fn equal(psw: &Psw) -> bool {
    psw.z
}

/// `BGE`: `N xor V = 0`.
pub const fn greater_or_equal(psw: &Psw) -> bool {
    !(psw.n ^ psw.v)
}

/// `BLT`: `N xor V = 1`.
pub const fn less_than(psw: &Psw) -> bool {
    psw.n ^ psw.v
}

/// `BGT`: `Z or (N xor V) = 0`.
pub const fn greater_than(psw: &Psw) -> bool {
    !(psw.z || (psw.n ^ psw.v))
}

/// `BLE`: `Z or (N xor V) = 1`.
pub const fn less_or_equal(psw: &Psw) -> bool {
    psw.z || (psw.n ^ psw.v)
}

/// `BPL`: `N = 0`.
pub const fn plus(psw: &Psw) -> bool {
    !psw.n
}

/// `BMI`: `N = 1`.
pub const fn minus(psw: &Psw) -> bool {
    psw.n
}

/// `BHI`: `C = 0` and `Z = 0`.
pub const fn higher(psw: &Psw) -> bool {
    !psw.c && !psw.z
}

/// `BLOS`: `C or Z = 1`.
pub const fn lower_or_same(psw: &Psw) -> bool {
    psw.c || psw.z
}

/// `BVC`: `V = 0`.
pub const fn overflow_clear(psw: &Psw) -> bool {
    !psw.v
}

/// `BVS`: `V = 1`.
pub const fn overflow_set(psw: &Psw) -> bool {
    psw.v
}

/// `BCC`: `C = 0`.
pub const fn carry_clear(psw: &Psw) -> bool {
    !psw.c
}

/// `BCS`: `C = 1`.
pub const fn carry_set(psw: &Psw) -> bool {
    psw.c
}
