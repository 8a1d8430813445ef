//! Store-aware validation of student payloads.
//!
//! Runs the field rules from `enrollment_common::validation` and adds the
//! uniqueness check, collecting every violation instead of stopping at the first.

use enrollment_common::error::{EnrollmentResult, FieldError, ViolationKind};
use enrollment_common::models::student::StudentPayload;
use enrollment_common::validation::{Validation, check_fields};
use sqlx::SqliteConnection;

use crate::Database;
use crate::repository::students;

/// Validate `payload` for insert (`self_id == None`) or for updating student `self_id`.
pub async fn validate(
    db: &Database,
    payload: StudentPayload,
    self_id: Option<i64>,
) -> EnrollmentResult<Validation> {
    let mut conn = db.pool.acquire().await?;
    validate_in(&mut conn, payload, self_id).await
}

pub async fn validate_in(
    conn: &mut SqliteConnection,
    payload: StudentPayload,
    self_id: Option<i64>,
) -> EnrollmentResult<Validation> {
    let payload = payload.normalized();
    let mut errors = check_fields(&payload);

    if let Some(email) = payload.email.as_deref() {
        if students::email_taken(&mut *conn, email, self_id).await? {
            errors.push(FieldError::new(
                "email",
                ViolationKind::DuplicateEmail,
                "Email is already registered to another student",
            ));
        }
    }

    if !errors.is_empty() {
        tracing::debug!(?self_id, violations = errors.len(), "Student payload rejected");
    }
    Ok(Validation::from_errors(payload, errors))
}
