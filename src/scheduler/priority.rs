//! Priority scheduling (non-preemptive).

use super::non_preemptive::dispatch_by_key;
use super::{ScheduleOutcome, SchedulingPolicy};
use crate::models::ProcessDescriptor;

/// Non-preemptive priority scheduling.
///
/// Lower `priority` value = higher precedence. Ties go to the earlier
/// arrival, then input order. No aging: a low-precedence process can
/// starve while higher-precedence work keeps arriving.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityPolicy;

impl SchedulingPolicy for PriorityPolicy {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> ScheduleOutcome {
        dispatch_by_key(processes, |p| p.priority)
    }

    fn description(&self) -> &'static str {
        "Priority (lower value first)"
    }
}

/// Runs Priority scheduling over `processes`.
pub fn run_priority(processes: &[ProcessDescriptor]) -> ScheduleOutcome {
    PriorityPolicy.schedule(processes)
}
