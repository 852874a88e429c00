//! Configuration system for the emulator.
//!
//! This module defines the configuration structures used to parameterize the
//! emulator. It provides:
//! 1. **Defaults:** Baseline trace depth and per-stage pipeline costs.
//! 2. **Structures:** Hierarchical config for general settings and pipeline timing.
//!
//! Configuration is supplied as JSON through [`Config::from_json`], or use
//! `Config::default()`. The memory map is fixed at compile time and is not
//! configurable.

use serde::Deserialize;

use crate::common::constants::{DEFAULT_STAGE_TICKS, DEFAULT_TRACE_DEPTH};

/// Default configuration constants for the emulator.
mod defaults {
    use super::{DEFAULT_STAGE_TICKS, DEFAULT_TRACE_DEPTH};

    /// Number of entries each trace buffer keeps before evicting the oldest.
    pub const TRACE_DEPTH: usize = DEFAULT_TRACE_DEPTH;

    /// Cost of the fetch stage.
    pub const FETCH_TICKS: u64 = DEFAULT_STAGE_TICKS;

    /// Cost of the decode stage.
    pub const DECODE_TICKS: u64 = DEFAULT_STAGE_TICKS;

    /// Cost of the execute stage.
    pub const EXECUTE_TICKS: u64 = DEFAULT_STAGE_TICKS;

    /// Cost of the memory access stage, write-back included.
    pub const MEMORY_TICKS: u64 = DEFAULT_STAGE_TICKS;
}

/// Top-level emulator configuration.
///
/// Every field may be omitted from the JSON document.
///
/// # Example
///
/// ```
/// use pdp11_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "trace_depth": 64
///     },
///     "pipeline": {
///         "execute_ticks": 3
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.trace_depth, 64);
/// assert_eq!(config.pipeline.execute_ticks, 3);
/// assert_eq!(config.pipeline.fetch_ticks, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General emulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline timing model costs
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed or a field has
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General emulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `tracing` event for every executed instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Capacity of the disassembly and byte trace buffers
    #[serde(default = "GeneralConfig::default_trace_depth")]
    pub trace_depth: usize,
}

impl GeneralConfig {
    fn default_trace_depth() -> usize {
        defaults::TRACE_DEPTH
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            trace_depth: defaults::TRACE_DEPTH,
        }
    }
}

/// Per-stage costs charged by the pipeline timing model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Fetch stage cost
    #[serde(default = "PipelineConfig::default_fetch_ticks")]
    pub fetch_ticks: u64,

    /// Decode stage cost
    #[serde(default = "PipelineConfig::default_decode_ticks")]
    pub decode_ticks: u64,

    /// Execute stage cost
    #[serde(default = "PipelineConfig::default_execute_ticks")]
    pub execute_ticks: u64,

    /// Memory access stage cost, charged for both memory access entries of a step
    #[serde(default = "PipelineConfig::default_memory_ticks")]
    pub memory_ticks: u64,
}

impl PipelineConfig {
    /// Returns the default fetch cost.
    fn default_fetch_ticks() -> u64 {
        defaults::FETCH_TICKS
    }

    /// Returns the default decode cost.
    fn default_decode_ticks() -> u64 {
        defaults::DECODE_TICKS
    }

    /// Returns the default execute cost.
    fn default_execute_ticks() -> u64 {
        defaults::EXECUTE_TICKS
    }

    /// Returns the default memory access cost.
    fn default_memory_ticks() -> u64 {
        defaults::MEMORY_TICKS
    }
}

impl Default for PipelineConfig {
    /// Charges one tick per stage.
    fn default() -> Self {
        Self {
            fetch_ticks: defaults::FETCH_TICKS,
            decode_ticks: defaults::DECODE_TICKS,
            execute_ticks: defaults::EXECUTE_TICKS,
            memory_ticks: defaults::MEMORY_TICKS,
        }
    }
}
