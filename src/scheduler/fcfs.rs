//! First-Come, First-Served.
//!
//! # Algorithm
//! 1. Stable-sort processes by arrival (equal arrivals keep input order).
//! 2. A single clock jumps forward to each arrival when idle, then runs
//!    the process to completion.
//!
//! # Complexity
//! O(n log n).

use super::{ScheduleOutcome, SchedulingPolicy};
use crate::models::{ProcessDescriptor, Segment, Timeline};

/// First-Come, First-Served (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> ScheduleOutcome {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival);

        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;

        for idx in order {
            let p = &processes[idx];
            if p.burst <= 0 {
                continue;
            }
            let start = clock.max(p.arrival);
            let finish = start + p.burst;
            timeline.push(Segment::new(&p.id, start, finish).with_rogue(p.is_rogue));
            clock = finish;
        }

        ScheduleOutcome::new(timeline, processes)
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

/// Runs FCFS over `processes`.
pub fn run_fcfs(processes: &[ProcessDescriptor]) -> ScheduleOutcome {
    Fcfs.schedule(processes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_arrival_order() {
        let processes = vec![
            ProcessDescriptor::new("P1", 2, 3),
            ProcessDescriptor::new("P2", 0, 4),
            ProcessDescriptor::new("P3", 1, 2),
        ];
        let out = run_fcfs(&processes);
        let ids: Vec<&str> = out
            .timeline
            .segments
            .iter()
            .map(|s| s.process_id.as_str())
            .collect();
        assert_eq!(ids, vec!["P2", "P3", "P1"]);
        assert_eq!(out.timeline.completion_time("P2"), Some(4));
        assert_eq!(out.timeline.completion_time("P3"), Some(6));
        assert_eq!(out.timeline.completion_time("P1"), Some(9));
    }

    #[test]
    fn test_fcfs_stable_ties() {
        let processes = vec![
            ProcessDescriptor::new("B", 0, 1),
            ProcessDescriptor::new("A", 0, 1),
        ];
        let out = run_fcfs(&processes);
        assert_eq!(out.timeline.segments[0].process_id, "B");
        assert_eq!(out.timeline.segments[1].process_id, "A");
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 2),
            ProcessDescriptor::new("P2", 5, 1),
        ];
        let out = run_fcfs(&processes);
        let p2 = &out.timeline.segments[1];
        assert_eq!(p2.start, 5);
        assert_eq!(p2.finish, 6);
    }

    #[test]
    fn test_fcfs_copies_rogue_flag() {
        let processes = vec![ProcessDescriptor::new("P1", 0, 2).with_rogue(true)];
        let out = run_fcfs(&processes);
        assert!(out.timeline.segments[0].is_rogue);
    }

    #[test]
    fn test_fcfs_empty() {
        let out = run_fcfs(&[]);
        assert!(out.timeline.is_empty());
        assert!(out.processes.is_empty());
    }
}
