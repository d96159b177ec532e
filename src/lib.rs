//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates single-core scheduling policies over a synthetic process
//! workload, with a lightweight rogue-process mitigation pass in front
//! and timeline metrics behind.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessDescriptor`, `Segment`, `Timeline`
//! - **`validation`**: Input integrity checks (IDs, arrivals, bursts, quantum)
//! - **`security`**: Rogue-process detection, throttling, demotion, termination
//! - **`scheduler`**: FCFS, SJF, SRTF, Round Robin, Priority engines
//! - **`metrics`**: Waiting/turnaround, throughput, utilization, detection rate
//! - **`workload`**: Random workload generation
//! - **`simulation`**: Pipeline driver composing all of the above
//!
//! # Architecture
//!
//! Every stage is a pure function over its arguments: no global state,
//! no interior mutability, no I/O. Independent runs can execute on
//! separate threads without coordination.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod metrics;
pub mod models;
pub mod scheduler;
pub mod security;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
