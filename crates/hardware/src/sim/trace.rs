//! Execution Trace Buffers.
//!
//! Bounded histories of what the engine executed, for display front-ends:
//! 1. **Disassembly:** One `mnemonic operands` line per executed instruction.
//! 2. **Byte trace:** The fetched instruction word as four hex digits.
//!
//! Both buffers evict their oldest entry once full.

use std::collections::VecDeque;

/// A bounded buffer of trace lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl TraceBuffer {
    /// Creates an empty buffer holding at most `capacity` lines.
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Appends a line, evicting the oldest one if the buffer is full.
    ///
    /// A zero-capacity buffer records nothing.
    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            let _ = self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// All retained lines, oldest first.
    pub fn all(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    /// The most recent `n` lines, oldest first. Returns every line if fewer are retained.
    pub fn last(&self, n: usize) -> Vec<String> {
        let skip = self.lines.len().saturating_sub(n);
        self.lines.iter().skip(skip).cloned().collect()
    }

    /// Most recent line.
    pub fn latest(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// Number of retained lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no lines are retained.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Maximum number of retained lines.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// The disassembly and byte traces kept side by side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceLog {
    /// Disassembled instructions.
    pub disassembly: TraceBuffer,
    /// Fetched instruction words as hex text.
    pub bytes: TraceBuffer,
}

impl TraceLog {
    /// Creates empty traces of depth `capacity` each.
    pub fn new(capacity: usize) -> Self {
        Self {
            disassembly: TraceBuffer::new(capacity),
            bytes: TraceBuffer::new(capacity),
        }
    }

    /// Records one executed instruction.
    pub fn push(&mut self, text: String, word: u16) {
        self.disassembly.push(text);
        self.bytes.push(format!("{word:04x}"));
    }

    /// Clears both traces.
    pub fn clear(&mut self) {
        self.disassembly.clear();
        self.bytes.clear();
    }
}
