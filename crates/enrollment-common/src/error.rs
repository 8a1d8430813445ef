//! Centralized error types for enrollment.
//!
//! Uses `thiserror` for ergonomic error definitions. Store-level uniqueness and
//! foreign-key failures are folded into [`EnrollmentError::ConstraintViolation`]
//! so callers never have to inspect driver errors.

use std::fmt;

use serde::Serialize;

/// The rule a rejected field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingField,
    MalformedEmail,
    DuplicateEmail,
}

/// One violated rule, ready for display next to its form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Core error type used across all enrollment crates.
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
    // === Validation errors ===
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Every violated rule of a rejected payload, in display order.
    #[error("Validation failed: {}", join_errors(.errors))]
    Rejected { errors: Vec<FieldError> },

    // === Resource errors ===
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    // === Infrastructure errors ===
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl EnrollmentError {
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    /// Error code string for programmatic handling by callers.
    pub fn error_code(&self) -> &str {
        match self {
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::Rejected { .. } => "VALIDATION_REJECTED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::ConstraintViolation { .. } => "CONSTRAINT_VIOLATION",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Migration(_) => "MIGRATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Field errors carried by this error, if it is a validation failure.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            Self::Rejected { errors } => errors.clone(),
            Self::MissingField { field } => vec![FieldError::new(
                field.clone(),
                ViolationKind::MissingField,
                format!("{field} is required"),
            )],
            _ => Vec::new(),
        }
    }
}

impl From<sqlx::Error> for EnrollmentError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
                return Self::ConstraintViolation {
                    message: db_err.message().to_string(),
                };
            }
        }
        Self::Database(err)
    }
}

/// Convenience type alias for Results using EnrollmentError.
pub type EnrollmentResult<T> = Result<T, EnrollmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_lists_every_field() {
        let err = EnrollmentError::Rejected {
            errors: vec![
                FieldError::new("name", ViolationKind::MissingField, "Name is required"),
                FieldError::new("email", ViolationKind::MalformedEmail, "Email must contain '@'"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Validation failed: name: Name is required; email: Email must contain '@'"
        );
        assert_eq!(err.error_code(), "VALIDATION_REJECTED");
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn test_not_found_display() {
        let err = EnrollmentError::not_found("Student", 7);
        assert_eq!(err.to_string(), "Student 7 not found");
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(err.field_errors().is_empty());
    }

    #[test]
    fn test_row_not_found_stays_database_error() {
        let err: EnrollmentError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_missing_field_maps_to_one_field_error() {
        let err = EnrollmentError::MissingField {
            field: "name".into(),
        };
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert_eq!(
            err.field_errors(),
            vec![FieldError::new("name", ViolationKind::MissingField, "name is required")]
        );
    }

    #[test]
    fn test_violation_kinds_order_by_rule() {
        assert!(ViolationKind::MissingField < ViolationKind::MalformedEmail);
        assert!(ViolationKind::MalformedEmail < ViolationKind::DuplicateEmail);
    }
}
