//! Timeline performance metrics.
//!
//! Reconstructs per-process and aggregate statistics from an engine's
//! segment list plus the (mitigated) descriptors it was built from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | last finish - arrival |
//! | Waiting | turnaround - burst |
//! | Throughput | completed / simulation span |
//! | CPU Utilization | 100 * busy ticks / simulation span, clamped to [0, 100] |
//! | Detection Rate | rogue / all descriptors (terminated included) |
//!
//! Simulation span is `max(finish) - min(start)`; a non-positive span
//! falls back to `max(1, sum(bursts))`. Time and rate values are rounded
//! to 3 decimals, utilization to 2.
//!
//! # Zero-segment fallback
//!
//! An active process with no segments is treated as if it ran once,
//! uninterrupted, from its arrival for its burst (turnaround = burst,
//! waiting = 0). This is a best-effort approximation, not a
//! reconstruction; such rows are marked [`ProcessStats::estimated`].
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::models::{ProcessDescriptor, Segment, Timeline};

/// Per-process outcome of a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process ID.
    pub id: String,
    /// Arrival tick.
    pub arrival: i64,
    /// Burst the scheduler was given (post-mitigation).
    pub burst: i64,
    /// Finish tick of the last segment.
    pub completion: i64,
    /// completion - arrival.
    pub turnaround: i64,
    /// turnaround - burst.
    pub waiting: i64,
    /// Flagged by the mitigator.
    pub is_rogue: bool,
    /// Produced by the zero-segment fallback rather than the timeline.
    pub estimated: bool,
}

/// Aggregate simulation metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Mean waiting time over active processes (ticks).
    pub average_waiting_time: f64,
    /// Mean turnaround time over active processes (ticks).
    pub average_turnaround_time: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Busy share of the simulation span (0.0..100.0).
    pub cpu_utilization: f64,
    /// Fraction of descriptors flagged rogue (0.0..1.0).
    pub detection_rate: f64,
}

impl MetricsRecord {
    /// Computes metrics from a timeline and its descriptors.
    ///
    /// # Arguments
    /// * `timeline` - Engine output.
    /// * `processes` - Mitigated descriptors, terminated ones included.
    pub fn calculate(timeline: &Timeline, processes: &[ProcessDescriptor]) -> Self {
        compute_metrics(&timeline.segments, processes)
    }
}

/// Computes per-process stats for every active (non-terminated) process,
/// in descriptor order.
///
/// Segments referring to unknown process IDs are ignored.
pub fn process_stats(segments: &[Segment], processes: &[ProcessDescriptor]) -> Vec<ProcessStats> {
    stats_from_groups(&group_segments(segments, processes), processes)
}

fn stats_from_groups(
    by_process: &HashMap<&str, Vec<&Segment>>,
    processes: &[ProcessDescriptor],
) -> Vec<ProcessStats> {
    processes
        .iter()
        .filter(|p| p.is_active())
        .map(|p| match by_process.get(p.id.as_str()) {
            Some(own) => {
                let completion = own.iter().map(|s| s.finish).max().unwrap_or(p.arrival);
                let turnaround = completion - p.arrival;
                ProcessStats {
                    id: p.id.clone(),
                    arrival: p.arrival,
                    burst: p.burst,
                    completion,
                    turnaround,
                    waiting: turnaround - p.burst,
                    is_rogue: p.is_rogue,
                    estimated: false,
                }
            }
            None => ProcessStats {
                id: p.id.clone(),
                arrival: p.arrival,
                burst: p.burst,
                completion: p.arrival + p.burst,
                turnaround: p.burst,
                waiting: 0,
                is_rogue: p.is_rogue,
                estimated: true,
            },
        })
        .collect()
}

/// Computes aggregate metrics. Never fails; empty input yields all zeros.
pub fn compute_metrics(segments: &[Segment], processes: &[ProcessDescriptor]) -> MetricsRecord {
    if processes.is_empty() {
        if !segments.is_empty() {
            warn!(
                segments = segments.len(),
                "segments without descriptors ignored"
            );
        }
        return MetricsRecord::default();
    }

    let by_process = group_segments(segments, processes);
    let stats = stats_from_groups(&by_process, processes);

    // Execution intervals per active process: real segments, or the
    // fallback interval [arrival, arrival + burst].
    let mut first_start: Option<i64> = None;
    let mut last_finish: Option<i64> = None;
    let mut busy: i64 = 0;

    for s in &stats {
        let (start, finish, executed) = match by_process.get(s.id.as_str()) {
            Some(own) => (
                own.iter().map(|seg| seg.start).min().unwrap_or(s.arrival),
                s.completion,
                own.iter().map(|seg| seg.duration().max(0)).sum(),
            ),
            None => (s.arrival, s.completion, s.burst),
        };
        first_start = Some(first_start.map_or(start, |v| v.min(start)));
        last_finish = Some(last_finish.map_or(finish, |v| v.max(finish)));
        busy += executed;
    }

    let mut span = match (first_start, last_finish) {
        (Some(first), Some(last)) => last - first,
        _ => 0,
    };
    if span <= 0 {
        let total_burst: i64 = stats.iter().map(|s| s.burst).sum();
        span = total_burst.max(1);
    }
    let span = span as f64;

    let active = stats.len();
    let (average_waiting_time, average_turnaround_time) = if active == 0 {
        (0.0, 0.0)
    } else {
        let total_wait: i64 = stats.iter().map(|s| s.waiting).sum();
        let total_turn: i64 = stats.iter().map(|s| s.turnaround).sum();
        (
            total_wait as f64 / active as f64,
            total_turn as f64 / active as f64,
        )
    };

    let rogue = processes.iter().filter(|p| p.is_rogue).count();

    MetricsRecord {
        average_waiting_time: round_to(average_waiting_time, 3),
        average_turnaround_time: round_to(average_turnaround_time, 3),
        throughput: round_to(active as f64 / span, 3),
        cpu_utilization: round_to((100.0 * busy as f64 / span).clamp(0.0, 100.0), 2),
        detection_rate: round_to(rogue as f64 / processes.len() as f64, 3),
    }
}

/// Groups segments by process, keeping only IDs present in `processes`.
fn group_segments<'a>(
    segments: &'a [Segment],
    processes: &[ProcessDescriptor],
) -> HashMap<&'a str, Vec<&'a Segment>> {
    let known: HashSet<&str> = processes.iter().map(|p| p.id.as_str()).collect();
    let mut grouped: HashMap<&'a str, Vec<&'a Segment>> = HashMap::new();
    let mut orphaned = 0usize;

    for s in segments {
        if known.contains(s.process_id.as_str()) {
            grouped.entry(s.process_id.as_str()).or_default().push(s);
        } else {
            orphaned += 1;
        }
    }
    if orphaned > 0 {
        warn!(orphaned, "segments for unknown processes ignored");
    }

    grouped
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
