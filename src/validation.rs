//! Input validation for scheduling runs.
//!
//! Two layers, matching the error taxonomy the engine exposes:
//!
//! - [`validate_input`] is the boundary validator a host runs once before
//!   invoking any policy. It collects every problem it finds (empty set,
//!   duplicate IDs, negative arrivals, non-positive bursts).
//! - [`ScheduleError`] is what the policy entry points themselves return for
//!   the preconditions they re-check when called directly: a non-empty
//!   process set and, for round-robin, a positive quantum. The engine never
//!   substitutes a default quantum — that is a caller-facing concern.
//!
//! Past this boundary the engine trusts its input; internal invariant
//! violations (e.g. negative remaining time) panic, since they indicate an
//! engine bug rather than a user error.

use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process set is empty.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process demands zero or negative CPU time.
    NonPositiveBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set before any policy runs.
///
/// Checks:
/// 1. The set is non-empty
/// 2. No duplicate process IDs
/// 3. All arrival times are >= 0
/// 4. All burst times are > 0
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
        ));
    }

    let mut seen = std::collections::HashSet::new();
    for p in processes {
        if !seen.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' arrives at {}", p.id, p.arrival_time),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Precondition failure returned by a policy entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No processes were supplied; no policy executes.
    EmptyProcessSet,
    /// Round-robin was invoked with a non-positive quantum.
    InvalidQuantum(i64),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::EmptyProcessSet => write!(f, "process set is empty"),
            ScheduleError::InvalidQuantum(q) => {
                write!(f, "quantum must be positive, got {q}")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let procs = vec![Process::new("P1", 0, 4), Process::new("P2", 1, 5)];
        assert!(validate_input(&procs).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_input(&[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyInput));
    }

    #[test]
    fn test_duplicate_id() {
        let procs = vec![Process::new("P1", 0, 4), Process::new("P1", 1, 5)];
        let errors = validate_input(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_negative_arrival() {
        let procs = vec![Process::new("P1", -1, 4)];
        let errors = validate_input(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_non_positive_burst() {
        let procs = vec![Process::new("P1", 0, 0)];
        let errors = validate_input(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_multiple_errors() {
        let procs = vec![Process::new("P1", -2, 0), Process::new("P1", 0, 4)];
        let errors = validate_input(&procs).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_schedule_error_display() {
        assert_eq!(
            ScheduleError::InvalidQuantum(0).to_string(),
            "quantum must be positive, got 0"
        );
        assert_eq!(
            ScheduleError::EmptyProcessSet.to_string(),
            "process set is empty"
        );
    }
}
