//! Shortest Job First (non-preemptive).

use super::non_preemptive::dispatch_by_key;
use super::{ScheduleOutcome, SchedulingPolicy};
use crate::models::ProcessDescriptor;

/// Shortest Job First.
///
/// Whenever the CPU frees up, runs the ready process with the smallest
/// burst to completion. Ties go to the earlier arrival, then input order.
///
/// Minimizes average waiting time among non-preemptive policies when all
/// jobs are available up front.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> ScheduleOutcome {
        dispatch_by_key(processes, |p| p.burst)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Runs SJF over `processes`.
pub fn run_sjf(processes: &[ProcessDescriptor]) -> ScheduleOutcome {
    Sjf.schedule(processes)
}
