//! Rogue-process detection and mitigation.
//!
//! A lightweight pre-scheduling pass that flags descriptors whose burst
//! or priority looks anomalous and defuses them before they reach a
//! scheduling engine.
//!
//! # Pipeline position
//!
//! ```text
//! generator → mitigate → filter terminated → engine → metrics
//! ```
//!
//! The pass is **not** idempotent: re-running it on already-mitigated
//! descriptors may throttle a rogue process again. Run it exactly once
//! per simulation.

mod mitigator;

pub use mitigator::{
    mitigate, AnomalyMitigator, MitigationSummary, DEFAULT_BURST_THRESHOLD,
    DEFAULT_PRIORITY_THRESHOLD, MAX_PRIORITY, PRIORITY_DEMOTION,
};
