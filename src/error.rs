//! Pipeline-level errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced before a simulation reaches the scheduling engines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid simulation input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    #[error("unknown scheduling algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;
    use crate::validation::validate_processes;

    #[test]
    fn test_invalid_input_message() {
        let errors = validate_processes(&[
            ProcessDescriptor::new("P1", 0, 0),
            ProcessDescriptor::new("P1", 0, 1),
        ])
        .unwrap_err();
        let err = SimulationError::from(errors);
        let text = err.to_string();
        assert!(text.starts_with("invalid simulation input:"));
        assert!(text.contains("non-positive burst"));
        assert!(text.contains("Duplicate process ID"));
    }

    #[test]
    fn test_unknown_algorithm_message() {
        let err = SimulationError::UnknownAlgorithm("LOTTERY".into());
        assert_eq!(err.to_string(), "unknown scheduling algorithm: LOTTERY");
    }
}
