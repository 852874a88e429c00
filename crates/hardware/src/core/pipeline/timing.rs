//! Pipeline Timing Model.
//!
//! Accounts for the cost of every executed step twice:
//! 1. **Naive:** Stages never overlap, so every recorded cost is paid in full.
//! 2. **Optimized:** A classic pipeline where, once the first instruction filled it,
//!    each further instruction costs only the slowest single stage observed.
//!
//! For `N` steps the optimized count is `fill + (N - 1) * steady`, where `fill` is the
//! unpipelined cost of the first step and `steady` the largest single-stage cost.
//! No hazards or stalls are modeled.

use super::stage::{PipelineStage, STAGE_COUNT};

/// Stage costs recorded for one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepRecord {
    entries: [Option<u64>; STAGE_COUNT],
}

impl StepRecord {
    /// Creates an empty record.
    pub const fn new() -> Self {
        Self {
            entries: [None; STAGE_COUNT],
        }
    }

    /// Records `ticks` under `stage`, returning the cost it replaced.
    ///
    /// Entries are keyed by tag. Memory access and write-back share the
    /// `MemoryAccess` tag, so the write-back entry replaces the memory entry and a
    /// step always carries four entries. Kept for compatibility with the reported
    /// tick totals; do not split the tag.
    pub const fn record(&mut self, stage: PipelineStage, ticks: u64) -> Option<u64> {
        self.entries[stage.index()].replace(ticks)
    }

    /// Cost recorded under `stage`, if any.
    pub const fn get(&self, stage: PipelineStage) -> Option<u64> {
        self.entries[stage.index()]
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all recorded costs.
    pub fn total(&self) -> u64 {
        self.entries.iter().flatten().sum()
    }

    /// Largest single recorded cost.
    pub fn max_stage(&self) -> u64 {
        self.entries.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Cumulative naive and optimized tick counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineTimer {
    steps: u64,
    naive: u64,
    fill: u64,
    steady: u64,
}

impl PipelineTimer {
    /// Creates a timer with no history.
    pub const fn new() -> Self {
        Self {
            steps: 0,
            naive: 0,
            fill: 0,
            steady: 0,
        }
    }

    /// Appends the record of a completed step.
    pub fn commit(&mut self, record: &StepRecord) {
        if self.steps == 0 {
            self.fill = record.total();
        }
        self.steps += 1;
        self.naive += record.total();
        self.steady = self.steady.max(record.max_stage());
    }

    /// Number of committed steps.
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Sum of all recorded costs.
    pub const fn naive_ticks(&self) -> u64 {
        self.naive
    }

    /// Cost with stage overlap between consecutive instructions.
    pub const fn optimized_ticks(&self) -> u64 {
        if self.steps == 0 {
            return 0;
        }
        self.fill + (self.steps - 1) * self.steady
    }

    /// Discards all history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
