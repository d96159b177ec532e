//! Process descriptor model.
//!
//! A process descriptor is the record every pipeline stage reads: the
//! generator fills the input fields, the mitigator tags and alters rogue
//! entries, and the engines consume it to produce segments.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the simulated CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier (e.g. "P1").
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU ticks required.
    pub burst: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// Flagged by the anomaly mitigator.
    #[serde(default)]
    pub is_rogue: bool,
    /// Still over threshold after throttling; excluded from scheduling.
    #[serde(default)]
    pub terminated: bool,
    /// Work left to execute (ticks). Used by preemptive policies.
    #[serde(default)]
    pub remaining: i64,
}

impl ProcessDescriptor {
    /// Creates a descriptor with priority 0 and `remaining = burst`.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: 0,
            is_rogue: false,
            terminated: false,
            remaining: burst,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Marks the descriptor as rogue.
    pub fn with_rogue(mut self, is_rogue: bool) -> Self {
        self.is_rogue = is_rogue;
        self
    }

    /// Marks the descriptor as terminated.
    pub fn with_terminated(mut self, terminated: bool) -> Self {
        self.terminated = terminated;
        self
    }

    /// Whether the process takes part in scheduling.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.terminated
    }

    /// Resets the working field to the full burst.
    pub(crate) fn reset_remaining(&mut self) {
        self.remaining = self.burst;
    }
}
