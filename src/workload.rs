//! Synthetic workload generation.
//!
//! Produces random process descriptors for simulation runs. Generation
//! takes any [`rand::Rng`], so a seeded generator gives a reproducible
//! workload.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_procsched::workload::WorkloadGenerator;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let processes = WorkloadGenerator::default().generate(6, &mut rng);
//!
//! assert_eq!(processes.len(), 6);
//! assert_eq!(processes[0].id, "P1");
//! assert!(processes.iter().all(|p| (2..=8).contains(&p.burst)));
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::models::ProcessDescriptor;

/// Default number of processes per generated workload.
pub const DEFAULT_PROCESS_COUNT: usize = 6;

/// Random workload generator.
///
/// Draws arrival, burst, and priority uniformly from inclusive ranges.
/// IDs are `P1..Pn` in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Arrival tick range.
    pub arrival: RangeInclusive<i64>,
    /// Burst range (ticks).
    pub burst: RangeInclusive<i64>,
    /// Priority range.
    pub priority: RangeInclusive<i32>,
}

impl WorkloadGenerator {
    /// Creates a generator with the default ranges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arrival range.
    pub fn with_arrival(mut self, range: RangeInclusive<i64>) -> Self {
        self.arrival = range;
        self
    }

    /// Sets the burst range. The lower bound is raised to 1 if needed.
    pub fn with_burst(mut self, range: RangeInclusive<i64>) -> Self {
        let (lo, hi) = range.into_inner();
        let lo = lo.max(1);
        self.burst = lo..=hi.max(lo);
        self
    }

    /// Sets the priority range.
    pub fn with_priority(mut self, range: RangeInclusive<i32>) -> Self {
        self.priority = range;
        self
    }

    /// Generates `count` descriptors.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<ProcessDescriptor> {
        (1..=count)
            .map(|n| {
                let arrival = sample(rng, &self.arrival);
                let burst = sample(rng, &self.burst);
                let priority = sample(rng, &self.priority);
                ProcessDescriptor::new(format!("P{n}"), arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            arrival: 0..=5,
            burst: 2..=8,
            priority: 1..=3,
        }
    }
}

/// Uniform draw; an empty (inverted) range yields its start.
fn sample<R, T>(rng: &mut R, range: &RangeInclusive<T>) -> T
where
    R: Rng,
    T: rand::distr::uniform::SampleUniform + PartialOrd + Copy,
{
    if range.is_empty() {
        *range.start()
    } else {
        rng.random_range(range.clone())
    }
}
