//! Instruction pipeline timing.
//!
//! The engine executes one instruction per step to completion. This module only
//! accounts for what the step would have cost on a pipelined machine:
//! 1. **Stages:** The tags a step's costs are recorded under.
//! 2. **Timing:** Per-step records and the cumulative naive/optimized counters.

/// Pipeline stage tags.
pub mod stage;

/// Per-step stage records and cumulative tick counters.
pub mod timing;

pub use stage::PipelineStage;
pub use timing::{PipelineTimer, StepRecord};
