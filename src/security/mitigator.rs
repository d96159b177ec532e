//! Anomaly mitigator.
//!
//! # Algorithm
//!
//! For every descriptor, on its pre-mitigation values:
//! 1. Detect: `burst > burst_threshold` or `priority < priority_threshold`.
//! 2. Throttle: `burst := max(1, burst / 2)`.
//! 3. Demote: `priority := min(MAX_PRIORITY, priority + PRIORITY_DEMOTION)`.
//! 4. Terminate if the throttled burst still exceeds `burst_threshold`.
//!
//! Steps 2-4 apply only to flagged descriptors.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::ProcessDescriptor;

/// Burst (ticks) above which a process is flagged.
pub const DEFAULT_BURST_THRESHOLD: i64 = 8;

/// Priority below which a process is flagged.
pub const DEFAULT_PRIORITY_THRESHOLD: i32 = 2;

/// Demotion ceiling (lowest precedence).
pub const MAX_PRIORITY: i32 = 10;

/// Priority steps added to a flagged process.
pub const PRIORITY_DEMOTION: i32 = 3;

/// Detection thresholds for the mitigation pass.
///
/// # Example
///
/// ```
/// use u_procsched::models::ProcessDescriptor;
/// use u_procsched::security::AnomalyMitigator;
///
/// let processes = vec![ProcessDescriptor::new("P1", 0, 12).with_priority(1)];
/// let mitigated = AnomalyMitigator::default().mitigate(&processes);
///
/// assert!(mitigated[0].is_rogue);
/// assert_eq!(mitigated[0].burst, 6);
/// assert_eq!(mitigated[0].priority, 4);
/// assert!(!mitigated[0].terminated);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyMitigator {
    /// Burst above which a process is rogue.
    pub burst_threshold: i64,
    /// Priority below which a process is rogue.
    pub priority_threshold: i32,
}

/// Counts produced by one mitigation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MitigationSummary {
    /// Descriptors examined.
    pub inspected: usize,
    /// Descriptors flagged as rogue.
    pub flagged: usize,
    /// Flagged descriptors that were terminated.
    pub terminated: usize,
}

impl AnomalyMitigator {
    /// Creates a mitigator with the given thresholds.
    pub fn new(burst_threshold: i64, priority_threshold: i32) -> Self {
        Self {
            burst_threshold,
            priority_threshold,
        }
    }

    /// Sets the burst threshold.
    pub fn with_burst_threshold(mut self, threshold: i64) -> Self {
        self.burst_threshold = threshold;
        self
    }

    /// Sets the priority threshold.
    pub fn with_priority_threshold(mut self, threshold: i32) -> Self {
        self.priority_threshold = threshold;
        self
    }

    /// Whether a descriptor matches either detection rule.
    pub fn is_anomalous(&self, process: &ProcessDescriptor) -> bool {
        process.burst > self.burst_threshold || process.priority < self.priority_threshold
    }

    /// Returns mitigated copies of `processes` (same order, same IDs).
    pub fn mitigate(&self, processes: &[ProcessDescriptor]) -> Vec<ProcessDescriptor> {
        self.mitigate_with_summary(processes).0
    }

    /// Like [`mitigate`](Self::mitigate), also returning pass counts.
    pub fn mitigate_with_summary(
        &self,
        processes: &[ProcessDescriptor],
    ) -> (Vec<ProcessDescriptor>, MitigationSummary) {
        let mut summary = MitigationSummary {
            inspected: processes.len(),
            ..Default::default()
        };

        let mitigated = processes
            .iter()
            .map(|p| {
                let out = self.mitigate_one(p);
                if out.is_rogue {
                    summary.flagged += 1;
                    if out.terminated {
                        summary.terminated += 1;
                    }
                }
                out
            })
            .collect();

        debug!(
            inspected = summary.inspected,
            flagged = summary.flagged,
            terminated = summary.terminated,
            "mitigation pass complete"
        );

        (mitigated, summary)
    }

    fn mitigate_one(&self, process: &ProcessDescriptor) -> ProcessDescriptor {
        let mut out = process.clone();
        out.is_rogue = self.is_anomalous(process);

        if !out.is_rogue {
            out.terminated = false;
            return out;
        }

        out.burst = (process.burst / 2).max(1);
        out.reset_remaining();
        out.priority = process.priority.saturating_add(PRIORITY_DEMOTION).min(MAX_PRIORITY);
        out.terminated = out.burst > self.burst_threshold;

        if out.terminated {
            warn!(
                process_id = %out.id,
                burst = process.burst,
                throttled = out.burst,
                "rogue process terminated"
            );
        } else {
            warn!(
                process_id = %out.id,
                burst = process.burst,
                throttled = out.burst,
                priority = out.priority,
                "rogue process throttled"
            );
        }

        out
    }
}

impl Default for AnomalyMitigator {
    fn default() -> Self {
        Self::new(DEFAULT_BURST_THRESHOLD, DEFAULT_PRIORITY_THRESHOLD)
    }
}

/// Flags and defuses rogue processes.
///
/// Shorthand for `AnomalyMitigator::new(burst_threshold, priority_threshold).mitigate(processes)`.
pub fn mitigate(
    processes: &[ProcessDescriptor],
    burst_threshold: i64,
    priority_threshold: i32,
) -> Vec<ProcessDescriptor> {
    AnomalyMitigator::new(burst_threshold, priority_threshold).mitigate(processes)
}
