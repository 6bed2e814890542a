//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (malformed
/// employee data, bad payroll configuration). There is no infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a birth date that does not parse).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_build_matching_variants() {
        assert_eq!(
            DomainError::validation("bad date"),
            DomainError::Validation("bad date".to_string())
        );
        assert_eq!(
            DomainError::invariant("negative salary"),
            DomainError::InvariantViolation("negative salary".to_string())
        );
        assert_eq!(
            DomainError::invalid_id("EmployeeId"),
            DomainError::InvalidId("EmployeeId".to_string())
        );
    }

    #[test]
    fn display_includes_message() {
        let err = DomainError::validation("birth year is not a number");
        assert_eq!(err.to_string(), "validation failed: birth year is not a number");
    }
}
