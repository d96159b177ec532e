//! Round Robin (preemptive, quantum-sliced).
//!
//! # Algorithm
//! 1. Admit processes to a FIFO ready queue in (stable) arrival order.
//! 2. Dispatch the head for `min(quantum, remaining)` ticks; one segment
//!    per slice, except that a process re-dispatched immediately after its
//!    own slice (nothing else was ready) extends its previous segment.
//! 3. After the slice, admit everything with `arrival <= clock` first,
//!    then re-enqueue the preempted process at the back.
//! 4. Empty queue with work still to arrive → jump to the next arrival.
//!
//! # Complexity
//! O(n log n + W / q) where W = total burst, q = quantum.

use std::collections::VecDeque;

use super::{initial_work, ScheduleOutcome, SchedulingPolicy};
use crate::models::{ProcessDescriptor, Timeline};

/// Round Robin with a fixed time quantum.
///
/// Each slice normally yields its own segment. When the same process is
/// dispatched again immediately after its own slice, because nothing else
/// was ready, the slice extends the previous segment instead. A single
/// Gantt bar can therefore span several quanta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    /// Ticks a process may run per dispatch (zero is treated as 1).
    pub quantum: u32,
}

impl RoundRobin {
    /// Creates a Round Robin policy.
    pub fn new(quantum: u32) -> Self {
        Self { quantum }
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(super::DEFAULT_QUANTUM)
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> ScheduleOutcome {
        let quantum = i64::from(self.quantum.max(1));
        let n = processes.len();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by_key(|&i| processes[i].arrival);
        let mut arrivals = order.into_iter().peekable();

        let mut remaining = initial_work(processes);
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;

        loop {
            while let Some(idx) = arrivals.next_if(|&i| processes[i].arrival <= clock) {
                queue.push_back(idx);
            }

            let Some(idx) = queue.pop_front() else {
                match arrivals.peek() {
                    Some(&next) => {
                        clock = processes[next].arrival;
                        continue;
                    }
                    None => break,
                }
            };

            if remaining[idx] <= 0 {
                continue;
            }

            let p = &processes[idx];
            let slice = quantum.min(remaining[idx]);
            timeline.extend_or_push(&p.id, clock, clock + slice, p.is_rogue);
            clock += slice;
            remaining[idx] -= slice;

            // Arrivals during (or exactly at the end of) the slice go ahead of the residual.
            while let Some(arrived) = arrivals.next_if(|&i| processes[i].arrival <= clock) {
                queue.push_back(arrived);
            }
            if remaining[idx] > 0 {
                queue.push_back(idx);
            }
        }

        ScheduleOutcome::new(timeline, processes)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

/// Runs Round Robin over `processes` with the given quantum.
pub fn run_round_robin(processes: &[ProcessDescriptor], quantum: u32) -> ScheduleOutcome {
    RoundRobin::new(quantum).schedule(processes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(out: &ScheduleOutcome) -> Vec<(&str, i64, i64)> {
        out.timeline
            .segments
            .iter()
            .map(|s| (s.process_id.as_str(), s.start, s.finish))
            .collect()
    }

    #[test]
    fn test_rr_new_arrival_before_requeue() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 5),
            ProcessDescriptor::new("P2", 1, 3),
        ];
        let out = run_round_robin(&processes, 2);
        assert_eq!(
            spans(&out),
            vec![
                ("P1", 0, 2),
                ("P2", 2, 4),
                ("P1", 4, 6),
                ("P2", 6, 7),
                ("P1", 7, 8),
            ]
        );
    }

    #[test]
    fn test_rr_arrival_at_slice_end() {
        // P2 arrives exactly when P1's first slice ends → runs next.
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 4),
            ProcessDescriptor::new("P2", 3, 1),
        ];
        let out = run_round_robin(&processes, 3);
        assert_eq!(spans(&out), vec![("P1", 0, 3), ("P2", 3, 4), ("P1", 4, 5)]);
    }

    #[test]
    fn test_rr_idle_jump() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 1),
            ProcessDescriptor::new("P2", 10, 2),
        ];
        let out = run_round_robin(&processes, 4);
        assert_eq!(spans(&out), vec![("P1", 0, 1), ("P2", 10, 12)]);
    }

    #[test]
    fn test_rr_short_job_single_slice() {
        let processes = vec![ProcessDescriptor::new("P1", 2, 3)];
        let out = run_round_robin(&processes, 5);
        assert_eq!(spans(&out), vec![("P1", 2, 5)]);
    }

    #[test]
    fn test_rr_zero_quantum_treated_as_one() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 2),
            ProcessDescriptor::new("P2", 0, 1),
        ];
        let out = run_round_robin(&processes, 0);
        assert_eq!(spans(&out), vec![("P1", 0, 1), ("P2", 1, 2), ("P1", 2, 3)]);
    }

    #[test]
    fn test_rr_back_to_back_slices_merge() {
        // P1 is alone for its first two slices → one segment until P2 shows up.
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 6),
            ProcessDescriptor::new("P2", 4, 2),
        ];
        let out = run_round_robin(&processes, 2);
        assert_eq!(spans(&out), vec![("P1", 0, 4), ("P2", 4, 6), ("P1", 6, 8)]);
    }

    #[test]
    fn test_rr_lone_process_single_bar() {
        let processes = vec![ProcessDescriptor::new("P1", 0, 6)];
        let out = run_round_robin(&processes, 2);
        assert_eq!(spans(&out), vec![("P1", 0, 6)]);
    }

    #[test]
    fn test_rr_preserves_work() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 7),
            ProcessDescriptor::new("P2", 0, 4),
            ProcessDescriptor::new("P3", 6, 5),
        ];
        let out = run_round_robin(&processes, 3);
        for p in &processes {
            assert_eq!(out.timeline.executed_time(&p.id), p.burst);
        }
        assert_eq!(out.timeline.busy_time(), 16);
    }
}
