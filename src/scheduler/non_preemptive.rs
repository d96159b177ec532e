//! Shared dispatch loop for non-preemptive, key-ordered policies.
//!
//! # Algorithm
//! At each decision point (clock value) the ready set is every arrived,
//! not-yet-completed process. The one with the smallest
//! `(key, arrival, input index)` runs to completion. If nothing is ready,
//! the clock jumps to the next arrival.
//!
//! # Complexity
//! O(n^2).

use super::{next_arrival, ScheduleOutcome};
use crate::models::{ProcessDescriptor, Segment, Timeline};

/// Runs a non-preemptive schedule ordered by `key`.
pub(super) fn dispatch_by_key<K, F>(processes: &[ProcessDescriptor], key: F) -> ScheduleOutcome
where
    K: Ord,
    F: Fn(&ProcessDescriptor) -> K,
{
    let n = processes.len();
    let mut done: Vec<bool> = processes.iter().map(|p| p.burst <= 0).collect();
    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;

    loop {
        let ready = (0..n)
            .filter(|&i| !done[i] && processes[i].arrival <= clock)
            .min_by_key(|&i| (key(&processes[i]), processes[i].arrival, i));

        let Some(idx) = ready else {
            match next_arrival(processes, |i| !done[i]) {
                Some(arrival) => {
                    clock = arrival;
                    continue;
                }
                None => break,
            }
        };

        let p = &processes[idx];
        let finish = clock + p.burst;
        timeline.push(Segment::new(&p.id, clock, finish).with_rogue(p.is_rogue));
        clock = finish;
        done[idx] = true;
    }

    ScheduleOutcome::new(timeline, processes)
}
