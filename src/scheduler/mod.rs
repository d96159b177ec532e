//! CPU scheduling engines.
//!
//! Five single-core policies that turn a list of process descriptors into
//! a [`Timeline`] of execution segments.
//!
//! | Policy | Preemptive | Selection key (ties) |
//! |--------|-----------|----------------------|
//! | FCFS | no | arrival (input order) |
//! | SJF | no | burst (arrival, input order) |
//! | SRTF | per tick | remaining (input order) |
//! | Round Robin | per quantum | FIFO queue |
//! | Priority | no | priority (arrival, input order) |
//!
//! # Preconditions
//!
//! Engines expect validated input (see [`crate::validation`]) with
//! terminated processes already filtered out. They never read hash-map
//! iteration order, so equal keys always resolve by input position.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

mod algorithm;
mod fcfs;
mod non_preemptive;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use algorithm::{Algorithm, DEFAULT_QUANTUM};
pub use fcfs::{run_fcfs, Fcfs};
pub use priority::{run_priority, PriorityPolicy};
pub use round_robin::{run_round_robin, RoundRobin};
pub use sjf::{run_sjf, Sjf};
pub use srtf::{run_srtf, Srtf};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{ProcessDescriptor, Timeline};

/// Result of running a scheduling engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Execution segments in dispatch order.
    pub timeline: Timeline,
    /// Input descriptors (input order) with their work fully consumed.
    pub processes: Vec<ProcessDescriptor>,
}

impl ScheduleOutcome {
    fn new(timeline: Timeline, processes: &[ProcessDescriptor]) -> Self {
        let processes = processes
            .iter()
            .map(|p| ProcessDescriptor {
                remaining: 0,
                ..p.clone()
            })
            .collect();
        Self {
            timeline,
            processes,
        }
    }
}

/// A CPU scheduling policy.
///
/// Implementations are pure: the same input always yields the same
/// timeline, and the input slice is never modified.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Display name, matching [`Algorithm::name`].
    fn name(&self) -> &'static str;

    /// Whether a running process can lose the CPU before completing.
    fn is_preemptive(&self) -> bool;

    /// Builds the execution timeline for `processes`.
    fn schedule(&self, processes: &[ProcessDescriptor]) -> ScheduleOutcome;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Initial work per process, floored at zero.
fn initial_work(processes: &[ProcessDescriptor]) -> Vec<i64> {
    processes.iter().map(|p| p.burst.max(0)).collect()
}

/// Earliest arrival among processes that still have work, if any.
fn next_arrival(processes: &[ProcessDescriptor], pending: impl Fn(usize) -> bool) -> Option<i64> {
    (0..processes.len())
        .filter(|&i| pending(i))
        .map(|i| processes[i].arrival)
        .min()
}
