//! End-to-end simulation pipeline.
//!
//! Composes the stages strictly left to right:
//!
//! ```text
//! validate → mitigate (optional) → drop terminated → engine → metrics
//! ```
//!
//! Each stage returns fresh values; the caller's descriptor list is never
//! modified, so the same workload can be re-run under every policy.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SimulationError;
use crate::metrics::{compute_metrics, process_stats, MetricsRecord, ProcessStats};
use crate::models::{ProcessDescriptor, Timeline};
use crate::scheduler::{Algorithm, DEFAULT_QUANTUM};
use crate::security::AnomalyMitigator;
use crate::validation::{validate_processes, validate_quantum};

/// Pipeline settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Round Robin quantum (ticks).
    pub quantum: u32,
    /// Run the anomaly mitigator before scheduling.
    pub secure: bool,
    /// Mitigator thresholds (used when `secure` is set).
    pub mitigator: AnomalyMitigator,
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: u32) -> Self {
        self.quantum = quantum;
        self
    }

    /// Enables or disables the mitigation pass.
    pub fn with_security(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Sets the mitigator thresholds.
    pub fn with_mitigator(mut self, mitigator: AnomalyMitigator) -> Self {
        self.mitigator = mitigator;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            secure: false,
            mitigator: AnomalyMitigator::default(),
        }
    }
}

/// Output of one policy over one workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy that produced the timeline.
    pub algorithm: Algorithm,
    /// Descriptors after mitigation, terminated ones included.
    pub processes: Vec<ProcessDescriptor>,
    /// Execution segments.
    pub timeline: Timeline,
    /// Per-process results for active processes.
    pub stats: Vec<ProcessStats>,
    /// Aggregate metrics.
    pub metrics: MetricsRecord,
}

impl SimulationReport {
    /// IDs of processes the mitigator terminated.
    pub fn terminated_ids(&self) -> Vec<&str> {
        self.processes
            .iter()
            .filter(|p| p.terminated)
            .map(|p| p.id.as_str())
            .collect()
    }

    /// Stats row for a process.
    pub fn stats_for(&self, process_id: &str) -> Option<&ProcessStats> {
        self.stats.iter().find(|s| s.id == process_id)
    }
}

/// Every policy over one workload, with and without mitigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityComparison {
    /// Reports with the mitigation pass disabled.
    pub baseline: Vec<SimulationReport>,
    /// Reports with the mitigation pass enabled.
    pub secured: Vec<SimulationReport>,
}

impl SecurityComparison {
    /// Baseline and secured reports for one policy.
    pub fn pair(&self, algorithm: Algorithm) -> Option<(&SimulationReport, &SimulationReport)> {
        let baseline = self.baseline.iter().find(|r| r.algorithm == algorithm)?;
        let secured = self.secured.iter().find(|r| r.algorithm == algorithm)?;
        Some((baseline, secured))
    }
}

/// Runs workloads through the pipeline.
///
/// # Example
///
/// ```
/// use u_procsched::models::ProcessDescriptor;
/// use u_procsched::scheduler::Algorithm;
/// use u_procsched::simulation::{SimulationConfig, Simulator};
///
/// let processes = vec![
///     ProcessDescriptor::new("P1", 0, 12).with_priority(1),
///     ProcessDescriptor::new("P2", 1, 4).with_priority(3),
/// ];
/// let simulator = Simulator::new(SimulationConfig::new().with_security(true));
/// let report = simulator.run(Algorithm::Fcfs, &processes).unwrap();
///
/// assert_eq!(report.timeline.completion_time("P2"), Some(10));
/// assert!((report.metrics.detection_rate - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs one policy over `processes`.
    pub fn run(
        &self,
        algorithm: Algorithm,
        processes: &[ProcessDescriptor],
    ) -> Result<SimulationReport, SimulationError> {
        let prepared = self.prepare(processes)?;
        Ok(self.schedule(algorithm, prepared))
    }

    /// Runs a policy selected by name (e.g. "SRTF", "rr").
    pub fn run_named(
        &self,
        algorithm: &str,
        processes: &[ProcessDescriptor],
    ) -> Result<SimulationReport, SimulationError> {
        let algorithm: Algorithm = algorithm.parse()?;
        self.run(algorithm, processes)
    }

    /// Runs every policy over the same mitigated workload.
    ///
    /// Mitigation happens once; each policy gets its own copy.
    pub fn run_all(
        &self,
        processes: &[ProcessDescriptor],
    ) -> Result<Vec<SimulationReport>, SimulationError> {
        let prepared = self.prepare(processes)?;
        Ok(Algorithm::ALL
            .iter()
            .map(|&algorithm| self.schedule(algorithm, prepared.clone()))
            .collect())
    }

    /// Runs every policy twice over `processes`: once without and once with
    /// the mitigation pass. The configured `secure` flag is ignored; quantum
    /// and mitigator thresholds apply to both halves.
    pub fn run_comparison(
        &self,
        processes: &[ProcessDescriptor],
    ) -> Result<SecurityComparison, SimulationError> {
        let baseline = Simulator::new(self.config.with_security(false)).run_all(processes)?;
        let secured = Simulator::new(self.config.with_security(true)).run_all(processes)?;
        Ok(SecurityComparison { baseline, secured })
    }

    /// Validates and (optionally) mitigates.
    fn prepare(
        &self,
        processes: &[ProcessDescriptor],
    ) -> Result<Vec<ProcessDescriptor>, SimulationError> {
        validate_processes(processes)?;
        validate_quantum(self.config.quantum)?;

        let prepared = if self.config.secure {
            self.config.mitigator.mitigate(processes)
        } else {
            processes
                .iter()
                .map(|p| {
                    let mut p = p.clone().with_rogue(false).with_terminated(false);
                    p.reset_remaining();
                    p
                })
                .collect()
        };

        Ok(prepared)
    }

    fn schedule(&self, algorithm: Algorithm, processes: Vec<ProcessDescriptor>) -> SimulationReport {
        let active: Vec<ProcessDescriptor> =
            processes.iter().filter(|p| p.is_active()).cloned().collect();

        let outcome = algorithm.run(&active, self.config.quantum);
        debug!(
            policy = algorithm.name(),
            active = active.len(),
            segments = outcome.timeline.len(),
            "timeline built"
        );

        let metrics = compute_metrics(&outcome.timeline.segments, &processes);
        let stats = process_stats(&outcome.timeline.segments, &processes);
        info!(
            policy = algorithm.name(),
            processes = processes.len(),
            avg_waiting = metrics.average_waiting_time,
            avg_turnaround = metrics.average_turnaround_time,
            cpu_utilization = metrics.cpu_utilization,
            "simulation complete"
        );

        SimulationReport {
            algorithm,
            processes,
            timeline: outcome.timeline,
            stats,
            metrics,
        }
    }
}
