//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//! Tick-granular simulation. At every tick, among arrived processes with
//! work left, the one with the least remaining time runs for one tick
//! (ties: lowest input index). Consecutive ticks of the same process are
//! merged into one segment; a switch or an idle gap opens a new one.
//!
//! # Complexity
//! O(W * n) where W = total burst.

use super::{initial_work, next_arrival, ScheduleOutcome, SchedulingPolicy};
use crate::models::{ProcessDescriptor, Timeline};

/// Shortest Remaining Time First.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> ScheduleOutcome {
        let n = processes.len();
        let mut remaining = initial_work(processes);
        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;

        loop {
            let ready = (0..n)
                .filter(|&i| remaining[i] > 0 && processes[i].arrival <= clock)
                .min_by_key(|&i| (remaining[i], i));

            let Some(idx) = ready else {
                match next_arrival(processes, |i| remaining[i] > 0) {
                    Some(arrival) => {
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let p = &processes[idx];
            timeline.extend_or_push(&p.id, clock, clock + 1, p.is_rogue);
            remaining[idx] -= 1;
            clock += 1;
        }

        ScheduleOutcome::new(timeline, processes)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Runs SRTF over `processes`.
pub fn run_srtf(processes: &[ProcessDescriptor]) -> ScheduleOutcome {
    Srtf.schedule(processes)
}
