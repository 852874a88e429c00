//! Instruction Semantics.
//!
//! One semantic-effect function per mnemonic. Each receives the address space and
//! the already-resolved operand locations, reads its operands, runs the ALU and
//! writes the result back. Branch predicates live in
//! [`bru`](crate::core::units::bru) since the engine applies the target itself.

use crate::common::Psw;
use crate::core::units::alu::{arithmetic, logic, shifts};
use crate::soc::{AddressSpace, Location};

/// An ALU operation on one operand that produces a result.
type UnaryOp = fn(u16, &mut Psw) -> u16;

/// An ALU operation on two operands that produces a result.
type BinaryOp = fn(u16, u16, &mut Psw) -> u16;

/// Read-modify-write of a single operand.
fn modify(space: &mut AddressSpace, dst: Location, op: UnaryOp) {
    let val = space.load(dst);
    let result = op(val, &mut space.registers.psw);
    space.store(dst, result);
}

/// Read `src` and `dst`, write the result to `dst`.
fn combine(space: &mut AddressSpace, src: Location, dst: Location, op: BinaryOp) {
    let a = space.load(src);
    let b = space.load(dst);
    let result = op(a, b, &mut space.registers.psw);
    space.store(dst, result);
}

/// `HALT`. Architectural state is left untouched; the step still completes and is
/// visible in the trace.
pub const fn halt(_space: &mut AddressSpace) {}

/// `NOP`.
pub const fn nop(_space: &mut AddressSpace) {}

/// `CLC`.
pub const fn clc(space: &mut AddressSpace) {
    space.registers.psw.c = false;
}

/// `CLV`.
pub const fn clv(space: &mut AddressSpace) {
    space.registers.psw.v = false;
}

/// `CLZ`.
pub const fn clz(space: &mut AddressSpace) {
    space.registers.psw.z = false;
}

/// `CLN`.
pub const fn cln(space: &mut AddressSpace) {
    space.registers.psw.n = false;
}

/// `CCC`.
pub fn ccc(space: &mut AddressSpace) {
    space.registers.psw = Psw::default();
}

/// `SEC`.
pub const fn sec(space: &mut AddressSpace) {
    space.registers.psw.c = true;
}

/// `SEV`.
pub const fn sev(space: &mut AddressSpace) {
    space.registers.psw.v = true;
}

/// `SEZ`.
pub const fn sez(space: &mut AddressSpace) {
    space.registers.psw.z = true;
}

/// `SEN`.
pub const fn sen(space: &mut AddressSpace) {
    space.registers.psw.n = true;
}

/// `SCC`.
pub fn scc(space: &mut AddressSpace) {
    space.registers.psw = Psw {
        n: true,
        z: true,
        v: true,
        c: true,
    };
}

/// `CLR dst`.
pub fn clr(space: &mut AddressSpace, dst: Location) {
    let result = logic::clr(&mut space.registers.psw);
    space.store(dst, result);
}

/// `COM dst`.
pub fn com(space: &mut AddressSpace, dst: Location) {
    modify(space, dst, logic::com);
}

/// `INC dst`.
pub fn inc(space: &mut AddressSpace, dst: Location) {
    modify(space, dst, arithmetic::inc);
}

/// `DEC dst`.
pub fn dec(space: &mut AddressSpace, dst: Location) {
    modify(space, dst, arithmetic::dec);
}

/// `NEG dst`.
pub fn neg(space: &mut AddressSpace, dst: Location) {
    modify(space, dst, arithmetic::neg);
}

/// `ADC dst`.
pub fn adc(space: &mut AddressSpace, dst: Location) {
    modify(space, dst, arithmetic::adc);
}

/// `SBC dst`.
pub fn sbc(space: &mut AddressSpace, dst: Location) {
    modify(space, dst, arithmetic::sbc);
}

/// `TST dst`.
pub fn tst(space: &mut AddressSpace, dst: Location) {
    let val = space.load(dst);
    logic::tst(val, &mut space.registers.psw);
}

/// `ROR dst`.
pub fn ror(space: &mut AddressSpace, dst: Location) {
    modify(space, dst, shifts::ror);
}

/// `ROL dst`.
pub fn rol(space: &mut AddressSpace, dst: Location) {
    modify(space, dst, shifts::rol);
}

/// `ASR dst`.
pub fn asr(space: &mut AddressSpace, dst: Location) {
    modify(space, dst, shifts::asr);
}

/// `ASL dst`.
pub fn asl(space: &mut AddressSpace, dst: Location) {
    modify(space, dst, shifts::asl);
}

/// `SWAB dst`.
pub fn swab(space: &mut AddressSpace, dst: Location) {
    modify(space, dst, logic::swab);
}

/// `MOV src, dst`.
pub fn mov(space: &mut AddressSpace, src: Location, dst: Location) {
    let val = space.load(src);
    let result = logic::mov(val, &mut space.registers.psw);
    space.store(dst, result);
}

/// `CMP src, dst`.
pub fn cmp(space: &mut AddressSpace, src: Location, dst: Location) {
    let a = space.load(src);
    let b = space.load(dst);
    arithmetic::cmp(a, b, &mut space.registers.psw);
}

/// `BIT src, dst`.
pub fn bit(space: &mut AddressSpace, src: Location, dst: Location) {
    let a = space.load(src);
    let b = space.load(dst);
    logic::bit(a, b, &mut space.registers.psw);
}

/// `BIC src, dst`.
pub fn bic(space: &mut AddressSpace, src: Location, dst: Location) {
    combine(space, src, dst, logic::bic);
}

/// `BIS src, dst`.
pub fn bis(space: &mut AddressSpace, src: Location, dst: Location) {
    combine(space, src, dst, logic::bis);
}

/// `ADD src, dst`.
pub fn add(space: &mut AddressSpace, src: Location, dst: Location) {
    combine(space, src, dst, arithmetic::add);
}

/// `SUB src, dst`.
pub fn sub(space: &mut AddressSpace, src: Location, dst: Location) {
    combine(space, src, dst, arithmetic::sub);
}

/// `XOR reg, dst`.
pub fn xor(space: &mut AddressSpace, src: Location, dst: Location) {
    combine(space, src, dst, logic::xor);
}
