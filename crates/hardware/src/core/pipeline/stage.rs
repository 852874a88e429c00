//! Pipeline stage tags.

use std::fmt;

/// Number of distinct stage tags.
pub const STAGE_COUNT: usize = 4;

/// A phase of instruction processing, used for timing accounting only.
///
/// There is no separate write-back tag: write-back is recorded under
/// [`PipelineStage::MemoryAccess`]. See [`StepRecord::record`](super::StepRecord::record).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PipelineStage {
    /// Instruction fetch.
    Fetch = 0,
    /// Table lookup and operand field extraction.
    Decode = 1,
    /// Operand resolution and the semantic effect.
    Execute = 2,
    /// Memory access and write-back.
    MemoryAccess = 3,
}

impl PipelineStage {
    /// All stage tags in pipeline order.
    pub const ALL: [Self; STAGE_COUNT] = [
        Self::Fetch,
        Self::Decode,
        Self::Execute,
        Self::MemoryAccess,
    ];

    /// Position of the stage within a step record.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fetch => "IF",
            Self::Decode => "ID",
            Self::Execute => "EX",
            Self::MemoryAccess => "MEM",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
