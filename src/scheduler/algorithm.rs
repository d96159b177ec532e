//! Policy selection by name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Fcfs, PriorityPolicy, RoundRobin, ScheduleOutcome, SchedulingPolicy, Sjf, Srtf};
use crate::error::SimulationError;
use crate::models::ProcessDescriptor;

/// Default Round Robin quantum (ticks).
pub const DEFAULT_QUANTUM: u32 = 3;

/// The five built-in scheduling policies.
///
/// Parses case-insensitively from the usual short names:
///
/// ```
/// use u_procsched::scheduler::Algorithm;
///
/// assert_eq!("srtf".parse::<Algorithm>().unwrap(), Algorithm::Srtf);
/// assert_eq!("Round Robin".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
/// assert!("lottery".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First.
    Sjf,
    /// Shortest Remaining Time First.
    Srtf,
    /// Round Robin.
    RoundRobin,
    /// Non-preemptive priority.
    Priority,
}

impl Algorithm {
    /// Every policy, in presentation order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::Priority => "Priority",
        }
    }

    /// Whether the policy is preemptive.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::Srtf | Algorithm::RoundRobin)
    }

    /// Builds the policy. `quantum` is only used by Round Robin.
    pub fn policy(&self, quantum: u32) -> Box<dyn SchedulingPolicy> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Srtf => Box::new(Srtf),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(quantum)),
            Algorithm::Priority => Box::new(PriorityPolicy),
        }
    }

    /// Runs the policy over `processes`.
    pub fn run(&self, processes: &[ProcessDescriptor], quantum: u32) -> ScheduleOutcome {
        self.policy(quantum).schedule(processes)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            "SRTF" => Ok(Algorithm::Srtf),
            "RR" | "ROUNDROBIN" => Ok(Algorithm::RoundRobin),
            "PRIORITY" => Ok(Algorithm::Priority),
            _ => Err(SimulationError::UnknownAlgorithm(s.to_string())),
        }
    }
}
