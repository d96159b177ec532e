//! Timeline (engine output) model.
//!
//! Every scheduling engine emits a [`Timeline`]: an ordered list of
//! [`Segment`]s, one per contiguous interval a process holds the CPU.
//! Non-preemptive policies produce one segment per process; preemptive
//! ones may produce several. Metrics consume both shapes through the
//! same type.

use serde::{Deserialize, Serialize};

/// One contiguous interval during which a single process occupies the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Executing process ID.
    pub process_id: String,
    /// Start tick (inclusive).
    pub start: i64,
    /// Finish tick (exclusive). Always greater than `start`.
    pub finish: i64,
    /// Rogue flag copied from the descriptor at scheduling time.
    pub is_rogue: bool,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(process_id: impl Into<String>, start: i64, finish: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            finish,
            is_rogue: false,
        }
    }

    /// Sets the rogue flag.
    pub fn with_rogue(mut self, is_rogue: bool) -> Self {
        self.is_rogue = is_rogue;
        self
    }

    /// Duration (finish - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.finish - self.start
    }
}

/// Ordered execution segments produced by a scheduling engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in dispatch order (non-decreasing `start`).
    pub segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Extends the last segment to `finish` if it belongs to `process_id`
    /// and ends exactly at `start`; otherwise appends a new segment.
    ///
    /// Used by tick-granular engines so that an uninterrupted run is one
    /// segment rather than one per tick.
    pub fn extend_or_push(&mut self, process_id: &str, start: i64, finish: i64, is_rogue: bool) {
        if let Some(last) = self.segments.last_mut() {
            if last.process_id == process_id && last.finish == start {
                last.finish = finish;
                return;
            }
        }
        self.segments
            .push(Segment::new(process_id, start, finish).with_rogue(is_rogue));
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Latest finish tick (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.finish).max().unwrap_or(0)
    }

    /// `max(finish) - min(start)` across all segments (0 if empty).
    pub fn span(&self) -> i64 {
        let first = self.segments.iter().map(|s| s.start).min();
        let last = self.segments.iter().map(|s| s.finish).max();
        match (first, last) {
            (Some(first), Some(last)) => last - first,
            _ => 0,
        }
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(Segment::duration).sum()
    }

    /// All segments for a given process, in timeline order.
    pub fn segments_for(&self, process_id: &str) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Completion tick of a process (finish of its last segment).
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.segments_for(process_id)
            .iter()
            .map(|s| s.finish)
            .max()
    }

    /// Total ticks executed by a process.
    pub fn executed_time(&self, process_id: &str) -> i64 {
        self.segments_for(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }
}

impl From<Vec<Segment>> for Timeline {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}
