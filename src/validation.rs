//! Input validation for process sets.
//!
//! The scheduling core assumes well-formed input. These checks run before
//! a batch simulation and detect:
//! - Empty process IDs
//! - Duplicate process IDs
//! - Zero burst times (a process that never needs the CPU)
//! - Time overflow (a timeline that would end past `u64::MAX`)

use crate::models::Process;
use std::collections::HashSet;

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
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty (or all-whitespace) ID.
    EmptyId,
    /// A process requires no CPU time.
    ZeroBurst,
    /// Some timestamp of the run would not fit in a `u64`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. Every process has a non-empty ID
/// 2. No two processes share an ID
/// 3. Every burst time is positive
/// 4. `arrival + burst` fits in a `u64` for every process
/// 5. Latest arrival plus total burst fits in a `u64`, which bounds the
///    end of any timeline over the set
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
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

        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has zero burst time", p.id),
            ));
        }

        if p.arrival_time.checked_add(p.burst_time).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimeOverflow,
                format!("Process '{}' finishes past the largest representable tick", p.id),
            ));
        }
    }

    let total_burst = processes
        .iter()
        .try_fold(0u64, |acc, p| acc.checked_add(p.burst_time));
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    if total_burst.and_then(|b| b.checked_add(latest_arrival)).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let processes = vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3),
        ];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P1", 2, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("P1"));
    }

    #[test]
    fn test_empty_id() {
        let errors = validate_processes(&[Process::new("  ", 0, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyId);
    }

    #[test]
    fn test_zero_burst() {
        let errors = validate_processes(&[Process::new("P1", 0, 0)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroBurst);
    }

    #[test]
    fn test_arrival_plus_burst_overflow() {
        let processes = vec![Process::new("P1", u64::MAX, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TimeOverflow && e.message.contains("P1")));
    }

    #[test]
    fn test_total_burst_overflow() {
        // Each process fits alone, but running both pushes the clock past u64::MAX.
        let processes = vec![
            Process::new("P1", u64::MAX - 10, 5),
            Process::new("P2", 0, u64::MAX - 20),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_large_times_within_bounds() {
        let processes = vec![
            Process::new("P1", u64::MAX - 10, 5),
            Process::new("P2", 0, 5),
        ];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            Process::new("P1", 0, 0),
            Process::new("P1", 0, 2),
            Process::new("", 0, 2),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
