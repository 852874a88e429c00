//! Single-step tests.
//!
//! Each test loads a few words into ROM and inspects the machine after one or two
//! steps.

use pdp11_core::common::{EmulatorError, Flag, MemoryError, ROM_BASE, Register};
use pdp11_core::config::Config;
use pdp11_core::core::StepOutcome;
use pdp11_core::core::arch::AddressingMode;
use pdp11_core::core::pipeline::PipelineStage;
use pdp11_core::isa::opcodes;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::{TestContext, absolute, branch, double, immediate, operand, reg, single};

#[test]
fn halt_completes_a_step() {
    let mut ctx = TestContext::new().load_program(&[opcodes::HALT]);

    assert_eq!(ctx.cpu.step(), Ok(StepOutcome::Continuing));
    assert_eq!(ctx.cpu.pc(), ROM_BASE + 2);
    assert_eq!(ctx.cpu.disassembly(), vec!["halt"]);
    assert_eq!(ctx.cpu.naive_ticks(), 4);
    assert_eq!(ctx.cpu.optimized_ticks(), 4);

    assert_eq!(ctx.cpu.step(), Ok(StepOutcome::Finished));
}

#[test]
fn finished_step_changes_nothing() {
    let mut ctx = TestContext::new().load_program(&[opcodes::NOP]);
    ctx.cpu.set_pc(0xC000);
    let before = ctx.cpu.clone();

    assert_eq!(ctx.cpu.step(), Ok(StepOutcome::Finished));
    assert_eq!(ctx.cpu.pc(), 0xC000);
    assert_eq!(ctx.cpu.naive_ticks(), before.naive_ticks());
    assert!(ctx.cpu.disassembly().is_empty());
    assert_eq!(ctx.cpu.stats.instructions, 0);
}

#[test]
fn finished_at_end_of_image_not_end_of_rom() {
    let mut ctx = TestContext::new().load_program(&[opcodes::NOP, opcodes::NOP]);
    ctx.cpu.set_pc(ROM_BASE + 4);
    assert_eq!(ctx.cpu.step(), Ok(StepOutcome::Finished));
}

#[test]
fn fetch_below_rom_fails() {
    let mut ctx = TestContext::new().load_program(&[opcodes::NOP]);
    ctx.cpu.set_pc(0x0100);

    assert_eq!(
        ctx.cpu.step(),
        Err(EmulatorError::Fetch(MemoryError::FetchOutOfRange { pc: 0x0100 }))
    );
    assert_eq!(ctx.cpu.pc(), 0x0100);
    assert_eq!(ctx.cpu.naive_ticks(), 0);
}

#[test]
fn odd_pc_fails_the_next_fetch() {
    let mut ctx = TestContext::new().load_program(&[
        single(opcodes::INC, reg(Register::Pc)),
        opcodes::NOP,
        opcodes::NOP,
    ]);

    assert_eq!(ctx.cpu.step(), Ok(StepOutcome::Continuing));
    assert_eq!(ctx.cpu.pc(), ROM_BASE + 3);
    assert_eq!(
        ctx.cpu.step(),
        Err(EmulatorError::Fetch(MemoryError::MisalignedFetch {
            pc: ROM_BASE + 3
        }))
    );
    assert_eq!(ctx.cpu.pc(), ROM_BASE + 3);
    assert_eq!(ctx.cpu.stats.instructions, 1);
}

#[test]
fn invalid_opcode_aborts_the_step() {
    let mut ctx =
        TestContext::new().load_program(&[0o000007, single(opcodes::INC, reg(Register::R0))]);

    assert_eq!(
        ctx.cpu.step(),
        Err(EmulatorError::InvalidOpcode {
            word: 0o000007,
            pc: ROM_BASE
        })
    );
    assert_eq!(ctx.cpu.pc(), ROM_BASE + 2);
    assert_eq!(ctx.cpu.naive_ticks(), 0);
    assert_eq!(ctx.cpu.optimized_ticks(), 0);
    assert!(ctx.cpu.disassembly().is_empty());
    assert_eq!(ctx.cpu.stats.invalid_opcodes, 1);
    assert_eq!(ctx.cpu.stats.instructions, 0);

    // The next word executes normally.
    assert_eq!(ctx.cpu.step(), Ok(StepOutcome::Continuing));
    assert_eq!(ctx.get_reg(Register::R0), 1);
}

#[test]
fn inc_wraps_and_sets_zero() {
    let mut ctx = TestContext::new()
        .load_program(&[single(opcodes::INC, reg(Register::R0))])
        .with_reg(Register::R0, 0xFFFF);

    let _ = ctx.cpu.step().unwrap();
    assert_eq!(ctx.get_reg(Register::R0), 0);
    assert!(ctx.cpu.flag(Flag::Z));
    assert!(!ctx.cpu.flag(Flag::N));
}

#[test]
fn immediate_source_consumes_extension_word() {
    let mut ctx = TestContext::new().load_program(&[
        double(opcodes::MOV, immediate(), reg(Register::R1)),
        0o17,
    ]);

    let _ = ctx.cpu.step().unwrap();
    assert_eq!(ctx.get_reg(Register::R1), 0o17);
    assert_eq!(ctx.cpu.pc(), ROM_BASE + 4);
    assert_eq!(ctx.cpu.disassembly(), vec!["mov #17, r1"]);
    assert_eq!(ctx.cpu.step(), Ok(StepOutcome::Finished));
}

#[test]
fn absolute_source_reads_memory() {
    let mut ctx = TestContext::new()
        .load_program(&[double(opcodes::MOV, absolute(), reg(Register::R2)), 0o400])
        .with_word(0o400, 0x1234);

    let _ = ctx.cpu.step().unwrap();
    assert_eq!(ctx.get_reg(Register::R2), 0x1234);
    assert_eq!(ctx.cpu.disassembly(), vec!["mov @#400, r2"]);
}

#[test]
fn unresolved_operand_skips_only_the_effect() {
    // clr @#140000: the address is past the end of the address space.
    let mut ctx = TestContext::new()
        .load_program(&[
            single(opcodes::CLR, absolute()),
            0xC000,
            single(opcodes::INC, reg(Register::R0)),
        ])
        .with_reg(Register::R0, 7);
    let psw = ctx.cpu.psw();

    assert_eq!(ctx.cpu.step(), Ok(StepOutcome::Continuing));
    assert_eq!(ctx.cpu.psw(), psw);
    assert_eq!(ctx.cpu.pc(), ROM_BASE + 4);
    assert_eq!(ctx.cpu.disassembly(), vec!["clr @#140000"]);
    assert_eq!(ctx.cpu.naive_ticks(), 4);
    assert_eq!(ctx.cpu.stats.operand_faults, 1);
    assert_eq!(ctx.cpu.stats.instructions, 1);

    // The address word was consumed, so the next instruction decodes normally.
    assert_eq!(ctx.cpu.step(), Ok(StepOutcome::Continuing));
    assert_eq!(ctx.get_reg(Register::R0), 8);
    assert_eq!(ctx.cpu.disassembly_last(1), vec!["inc r0"]);
}

#[test]
fn failed_source_still_consumes_destination_index() {
    // mov @#140000, 4(r2)
    let mut ctx = TestContext::new()
        .load_program(&[
            double(
                opcodes::MOV,
                absolute(),
                operand(AddressingMode::Index, Register::R2),
            ),
            0xC000,
            4,
        ])
        .with_reg(Register::R2, 0o1000)
        .with_word(0o1004, 0o52);

    let _ = ctx.cpu.step().unwrap();
    assert_eq!(ctx.cpu.pc(), ROM_BASE + 6);
    assert_eq!(ctx.read_word(0o1004), 0o52);
    assert_eq!(ctx.cpu.disassembly(), vec!["mov @#140000, 4(r2)"]);
    assert_eq!(ctx.cpu.stats.operand_faults, 1);
}

#[test]
fn index_out_of_range_is_a_fault() {
    let mut ctx = TestContext::new()
        .load_program(&[
            single(
                opcodes::INC,
                operand(AddressingMode::Index, Register::R1),
            ),
            0o100,
        ])
        .with_reg(Register::R1, 0xBFF0);

    assert_eq!(ctx.cpu.step(), Ok(StepOutcome::Continuing));
    assert_eq!(ctx.cpu.pc(), ROM_BASE + 4);
    assert_eq!(ctx.cpu.disassembly(), vec!["inc 100(r1)"]);
    assert_eq!(ctx.cpu.stats.operand_faults, 1);
}

#[test]
fn branch_taken_skips_words() {
    let mut ctx = TestContext::new().load_program(&[
        branch(opcodes::BNE, 1),
        single(opcodes::INC, reg(Register::R0)),
        single(opcodes::INC, reg(Register::R1)),
    ]);

    let _ = ctx.cpu.step().unwrap();
    assert_eq!(ctx.cpu.pc(), ROM_BASE + 4);
    assert_eq!(ctx.cpu.stats.branches_taken, 1);
    assert_eq!(ctx.cpu.disassembly(), vec!["bne 1"]);
}

#[test]
fn branch_not_taken_falls_through() {
    let mut ctx = TestContext::new().load_program(&[
        opcodes::SEZ,
        branch(opcodes::BNE, 1),
        single(opcodes::INC, reg(Register::R0)),
    ]);

    let _ = ctx.run(2).unwrap();
    assert_eq!(ctx.cpu.pc(), ROM_BASE + 4);
    assert_eq!(ctx.cpu.stats.inst_branch, 1);
    assert_eq!(ctx.cpu.stats.branches_taken, 0);
}

#[test]
fn byte_trace_holds_fetched_words_in_hex() {
    let mut ctx = TestContext::new().load_program(&[
        single(opcodes::INC, reg(Register::R0)),
        opcodes::NOP,
        opcodes::HALT,
    ]);

    let _ = ctx.run_to_end().unwrap();
    assert_eq!(ctx.cpu.byte_trace(), vec!["0a80", "00a0", "0000"]);
    assert_eq!(ctx.cpu.byte_trace_last(2), vec!["00a0", "0000"]);
    assert_eq!(ctx.cpu.disassembly_last(1), vec!["halt"]);
    assert_eq!(ctx.cpu.disassembly_last(10).len(), 3);
}

#[test]
fn trace_depth_bounds_both_traces() {
    let mut config = Config::default();
    config.general.trace_depth = 2;
    let mut ctx = TestContext::with_config(&config).load_program(&[
        opcodes::SEC,
        opcodes::SEV,
        opcodes::SEZ,
    ]);

    let _ = ctx.run_to_end().unwrap();
    assert_eq!(ctx.cpu.disassembly(), vec!["sev", "sez"]);
    assert_eq!(ctx.cpu.byte_trace().len(), 2);
}

#[test]
fn stage_costs_come_from_config() {
    let mut config = Config::default();
    config.pipeline.fetch_ticks = 2;
    config.pipeline.decode_ticks = 1;
    config.pipeline.execute_ticks = 3;
    config.pipeline.memory_ticks = 5;
    let mut ctx = TestContext::with_config(&config).load_program(&[opcodes::NOP, opcodes::NOP]);

    let _ = ctx.run_to_end().unwrap();
    // 2 + 1 + 3 + 5 per step, the memory access stage being the slowest.
    assert_eq!(ctx.cpu.naive_ticks(), 22);
    assert_eq!(ctx.cpu.optimized_ticks(), 11 + 5);
    assert_eq!(ctx.cpu.timer().steps(), 2);
}

#[test]
fn memory_cost_moves_the_totals() {
    let run = |memory_ticks| {
        let mut config = Config::default();
        config.pipeline.memory_ticks = memory_ticks;
        let mut ctx = TestContext::with_config(&config).load_program(&[opcodes::NOP]);
        let _ = ctx.run_to_end().unwrap();
        ctx.cpu.naive_ticks()
    };
    assert_eq!(run(1), 4);
    assert_eq!(run(100), 103);
}

#[test]
fn tracing_flag_does_not_change_behaviour() {
    let mut config = Config::default();
    config.general.trace_instructions = true;
    let mut ctx = TestContext::with_config(&config)
        .load_program(&[single(opcodes::COM, reg(Register::R3))]);

    let _ = ctx.cpu.step().unwrap();
    assert_eq!(ctx.get_reg(Register::R3), 0xFFFF);
    assert!(ctx.cpu.flag(Flag::C));
}

#[test]
fn reset_returns_to_power_on_state() {
    let mut ctx = TestContext::new()
        .load_program(&[single(opcodes::INC, reg(Register::R0)), opcodes::SEC])
        .with_word(0x4000, 0xBEEF);
    let _ = ctx.run_to_end().unwrap();

    ctx.cpu.reset();

    assert_eq!(ctx.cpu.pc(), 0);
    assert_eq!(ctx.get_reg(Register::R0), 0);
    assert!(!ctx.cpu.flag(Flag::C));
    assert_eq!(ctx.cpu.space.rom_len(), 0);
    assert!(ctx.cpu.disassembly().is_empty());
    assert!(ctx.cpu.byte_trace().is_empty());
    assert_eq!(ctx.cpu.naive_ticks(), 0);
    assert_eq!(ctx.cpu.optimized_ticks(), 0);
    assert_eq!(ctx.cpu.stats.instructions, 0);

    let mut buf = [0xAA_u8; 4];
    assert_eq!(ctx.cpu.video_snapshot(&mut buf), 4);
    assert_eq!(buf, [0; 4]);
    assert_eq!(ctx.cpu.rom_snapshot(&mut buf), 4);
    assert_eq!(buf, [0; 4]);
}

#[test]
fn dump_state_leaves_the_machine_alone() {
    let mut ctx = TestContext::new()
        .load_program(&[single(opcodes::INC, reg(Register::R5))])
        .with_reg(Register::R5, 0o777);
    let _ = ctx.cpu.step().unwrap();
    let before = ctx.cpu.clone();

    ctx.cpu.dump_state();

    assert_eq!(ctx.cpu.pc(), before.pc());
    assert_eq!(ctx.cpu.space.registers, before.space.registers);
    assert_eq!(ctx.cpu.disassembly(), before.disassembly());
}

#[test]
fn stage_tags_are_named() {
    let names: Vec<_> = PipelineStage::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["IF", "ID", "EX", "MEM"]);
}

proptest! {
    #[test]
    fn default_costs_give_closed_form_totals(k in 1_usize..64) {
        let mut ctx = TestContext::new().load_program(&vec![opcodes::NOP; k]);
        prop_assert_eq!(ctx.run_to_end().unwrap(), k);

        let k = k as u64;
        prop_assert_eq!(ctx.cpu.naive_ticks(), 4 * k);
        prop_assert_eq!(ctx.cpu.optimized_ticks(), 4 + (k - 1));
        prop_assert!(ctx.cpu.optimized_ticks() <= ctx.cpu.naive_ticks());
    }
}
