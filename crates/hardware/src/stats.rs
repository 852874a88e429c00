//! Emulation statistics collection and reporting.
//!
//! This module tracks what the execution engine did. It provides:
//! 1. **Throughput:** Executed steps and derived host speed.
//! 2. **Instruction mix:** Counts by instruction shape.
//! 3. **Branches:** Conditional branches executed and taken.
//! 4. **Pipeline:** Naive and optimized tick totals and the ticks saved by overlap.

use std::fmt;
use std::time::Instant;

use crate::isa::InstructionShape;

/// Emulation statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of steps that executed an instruction.
    pub instructions: u64,

    /// Count of no-operand instructions executed.
    pub inst_no_operand: u64,
    /// Count of single-operand instructions executed.
    pub inst_single: u64,
    /// Count of double-operand instructions executed, including register-source ones.
    pub inst_double: u64,
    /// Count of conditional branches executed.
    pub inst_branch: u64,

    /// Number of branches whose condition held.
    pub branches_taken: u64,
    /// Number of steps whose semantic effect was skipped because an operand failed to resolve.
    pub operand_faults: u64,
    /// Number of steps aborted on a word matching no instruction.
    pub invalid_opcodes: u64,

    /// Cumulative ticks with no stage overlap.
    pub naive_ticks: u64,
    /// Cumulative ticks with pipelined stage overlap.
    pub optimized_ticks: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions: 0,
            inst_no_operand: 0,
            inst_single: 0,
            inst_double: 0,
            inst_branch: 0,
            branches_taken: 0,
            operand_faults: 0,
            invalid_opcodes: 0,
            naive_ticks: 0,
            optimized_ticks: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"branch"`, `"pipeline"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch", "pipeline"];

const RULE: &str = "==========================================================";
const THIN_RULE: &str = "----------------------------------------------------------";

/// Percentage of `part` in `whole`, zero when `whole` is zero.
fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}

impl SimStats {
    /// Counts one executed instruction of the given shape.
    pub const fn record_instruction(&mut self, shape: InstructionShape) {
        self.instructions += 1;
        match shape {
            InstructionShape::NoOperand => self.inst_no_operand += 1,
            InstructionShape::SingleOperand => self.inst_single += 1,
            InstructionShape::DoubleOperand | InstructionShape::DoubleOperandReg => {
                self.inst_double += 1;
            }
            InstructionShape::ConditionalBranch => self.inst_branch += 1,
        }
    }

    /// Ticks saved by overlapping stages.
    pub const fn ticks_saved(&self) -> u64 {
        self.naive_ticks.saturating_sub(self.optimized_ticks)
    }

    /// Writes the requested sections to `out`.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying writer.
    pub fn write_sections<S: AsRef<str>>(
        &self,
        out: &mut impl fmt::Write,
        sections: &[S],
    ) -> fmt::Result {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x.as_ref() == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.instructions;

        writeln!(out, "{RULE}")?;
        if want("summary") {
            let ips = if seconds > 0.0 {
                total as f64 / seconds
            } else {
                0.0
            };
            writeln!(out, "PDP-11 EMULATION STATISTICS")?;
            writeln!(out, "{RULE}")?;
            writeln!(out, "host_seconds             {seconds:.4} s")?;
            writeln!(out, "sim_insts                {total}")?;
            writeln!(out, "sim_insts_per_sec        {ips:.2}")?;
            writeln!(out, "operand_faults           {}", self.operand_faults)?;
            writeln!(out, "invalid_opcodes          {}", self.invalid_opcodes)?;
            writeln!(out, "{THIN_RULE}")?;
        }
        if want("instruction_mix") {
            writeln!(out, "INSTRUCTION MIX")?;
            let rows = [
                ("op.no_operand", self.inst_no_operand),
                ("op.single", self.inst_single),
                ("op.double", self.inst_double),
                ("op.branch", self.inst_branch),
            ];
            for (name, count) in rows {
                writeln!(out, "  {name:<22} {count} ({:.2}%)", percent(count, total))?;
            }
            writeln!(out, "{THIN_RULE}")?;
        }
        if want("branch") {
            writeln!(out, "BRANCHES")?;
            writeln!(out, "  br.executed            {}", self.inst_branch)?;
            writeln!(
                out,
                "  br.taken               {} ({:.2}%)",
                self.branches_taken,
                percent(self.branches_taken, self.inst_branch)
            )?;
            writeln!(out, "{THIN_RULE}")?;
        }
        if want("pipeline") {
            writeln!(out, "PIPELINE TIMING")?;
            writeln!(out, "  ticks.naive            {}", self.naive_ticks)?;
            writeln!(out, "  ticks.optimized        {}", self.optimized_ticks)?;
            writeln!(
                out,
                "  ticks.saved            {} ({:.2}%)",
                self.ticks_saved(),
                percent(self.ticks_saved(), self.naive_ticks)
            )?;
        }
        writeln!(out, "{RULE}")
    }

    /// Renders the requested sections, or all of them for an empty slice.
    pub fn report<S: AsRef<str>>(&self, sections: &[S]) -> String {
        let mut out = String::new();
        let _ = self.write_sections(&mut out, sections);
        out
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an empty
    /// slice to print all sections (same as `print()`).
    pub fn print_sections<S: AsRef<str>>(&self, sections: &[S]) {
        print!("{}", self.report(sections));
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections::<&str>(&[]);
    }
}
