//! Input validation for simulation runs.
//!
//! Checks structural integrity of process descriptors before they reach
//! the scheduling loops. Detects:
//! - Empty or duplicate IDs
//! - Negative arrival ticks
//! - Zero or negative bursts (would stall tick-granular engines)
//! - Arrival or completion past [`MAX_TICK`]
//! - A zero Round Robin quantum

use crate::models::ProcessDescriptor;
use std::collections::HashSet;

/// Latest tick a process may arrive at or finish by on its own
/// (`arrival + burst`). Keeps clock arithmetic far from `i64` overflow and
/// bounds the tick-granular SRTF loop.
pub const MAX_TICK: i64 = 1_000_000;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has an empty ID.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// `arrival + burst` exceeds [`MAX_TICK`].
    OutOfRange,
    /// Round Robin quantum is zero.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a descriptor list.
///
/// Checks:
/// 1. Every process has a non-empty ID
/// 2. No duplicate IDs
/// 3. `arrival >= 0`
/// 4. `burst > 0`
/// 5. `arrival + burst <= MAX_TICK`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (idx, p) in processes.iter().enumerate() {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {idx} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.id, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.id, p.burst),
            ));
        }

        if p.arrival.saturating_add(p.burst) > MAX_TICK {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!(
                    "Process '{}' runs past tick {MAX_TICK} (arrival {}, burst {})",
                    p.id, p.arrival, p.burst
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: u32) -> ValidationResult {
    if quantum == 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Round Robin quantum must be at least 1 tick",
        )]);
    }
    Ok(())
}
