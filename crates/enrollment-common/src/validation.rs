//! Input validation utilities.
//!
//! Field rules are declared on [`StudentPayload`] with `validator`; this module turns
//! their unordered output into the ordered list callers display. Rules that need the
//! store (duplicate email) are applied by `enrollment-db` on top of [`check_fields`].

use validator::{Validate, ValidationErrors};

use crate::error::{EnrollmentError, FieldError, ViolationKind};
use crate::models::student::{NewStudent, StudentPayload};

/// Field display order for rejections.
const FIELD_ORDER: &[&str] = &["name", "email", "age"];

/// Outcome of validating a student payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Accepted(NewStudent),
    Rejected(Vec<FieldError>),
}

impl Validation {
    /// Build the outcome from collected errors; an empty list accepts the payload.
    pub fn from_errors(payload: StudentPayload, mut errors: Vec<FieldError>) -> Self {
        sort_errors(&mut errors);
        if !errors.is_empty() {
            return Self::Rejected(errors);
        }
        match payload.into_new_student() {
            Some(student) => Self::Accepted(student),
            // Unreachable while check_fields reports every absent scalar.
            None => Self::Rejected(vec![FieldError::new(
                "payload",
                ViolationKind::MissingField,
                "Incomplete student payload",
            )]),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Accepted(_) => &[],
            Self::Rejected(errors) => errors,
        }
    }

    pub fn has(&self, kind: ViolationKind) -> bool {
        self.errors().iter().any(|e| e.kind == kind)
    }

    /// Turn a rejection into [`EnrollmentError::Rejected`].
    pub fn into_result(self) -> Result<NewStudent, EnrollmentError> {
        match self {
            Self::Accepted(student) => Ok(student),
            Self::Rejected(errors) => Err(EnrollmentError::Rejected { errors }),
        }
    }
}

/// Run the store-independent rules (required fields, email shape) on a normalized payload.
pub fn check_fields(payload: &StudentPayload) -> Vec<FieldError> {
    match payload.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_field_errors(&errors),
    }
}

/// Flatten `validator` output into [`FieldError`]s, in rule order then field order.
fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let field_errors = errors.field_errors();
    let mut out = Vec::new();

    for field in FIELD_ORDER {
        let Some(errs) = field_errors.get(*field) else {
            continue;
        };
        for e in errs.iter() {
            let kind = match &*e.code {
                "malformed_email" => ViolationKind::MalformedEmail,
                _ => ViolationKind::MissingField,
            };
            let message = e
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for '{field}'"));
            out.push(FieldError::new(*field, kind, message));
        }
    }

    sort_errors(&mut out);
    out
}

/// Stable sort by rule, keeping field order within a rule.
fn sort_errors(errors: &mut [FieldError]) {
    errors.sort_by_key(|e| e.kind);
}

/// Validate a course name before insert or rename.
pub fn validate_course_name(name: &str) -> Result<&str, EnrollmentError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EnrollmentError::MissingField {
            field: "name".into(),
        });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(errors: &[FieldError]) -> Vec<(String, ViolationKind)> {
        errors.iter().map(|e| (e.field.clone(), e.kind)).collect()
    }

    #[test]
    fn test_complete_payload_has_no_field_errors() {
        let payload = StudentPayload::new("Joe", "joe@weber.edu", 21);
        assert!(check_fields(&payload).is_empty());
    }

    #[test]
    fn test_email_without_at_is_malformed() {
        let payload = StudentPayload::new("Joe", "no-at-sign", 21);
        let errors = check_fields(&payload);
        assert_eq!(
            kinds(&errors),
            vec![("email".to_string(), ViolationKind::MalformedEmail)]
        );
        assert_eq!(errors[0].message, "Email must contain '@'");
    }

    #[test]
    fn test_all_missing_fields_reported_in_order() {
        let errors = check_fields(&StudentPayload::default());
        assert_eq!(
            kinds(&errors),
            vec![
                ("name".to_string(), ViolationKind::MissingField),
                ("email".to_string(), ViolationKind::MissingField),
                ("age".to_string(), ViolationKind::MissingField),
            ]
        );
    }

    #[test]
    fn test_missing_and_malformed_collected_together() {
        let payload = StudentPayload {
            email: Some("no-at-sign".into()),
            ..StudentPayload::default()
        };
        let errors = check_fields(&payload);
        assert_eq!(
            kinds(&errors),
            vec![
                ("name".to_string(), ViolationKind::MissingField),
                ("age".to_string(), ViolationKind::MissingField),
                ("email".to_string(), ViolationKind::MalformedEmail),
            ]
        );
    }

    #[test]
    fn test_from_errors_sorts_and_rejects() {
        let outcome = Validation::from_errors(
            StudentPayload::new("Joe", "joe@weber.edu", 21),
            vec![
                FieldError::new("email", ViolationKind::DuplicateEmail, "taken"),
                FieldError::new("name", ViolationKind::MissingField, "required"),
            ],
        );
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.errors()[0].kind, ViolationKind::MissingField);
        assert!(outcome.has(ViolationKind::DuplicateEmail));
        assert!(matches!(
            outcome.into_result(),
            Err(EnrollmentError::Rejected { errors }) if errors.len() == 2
        ));
    }

    #[test]
    fn test_from_errors_accepts_normalized_payload() {
        let outcome = Validation::from_errors(
            StudentPayload::new(" Joe ", "joe@weber.edu", 21).with_nick_names(["Jojo", ""]),
            Vec::new(),
        );
        let student = outcome.into_result().expect("accepted");
        assert_eq!(student.name, "Joe");
        assert_eq!(student.nick_names, vec!["Jojo"]);
    }

    #[test]
    fn test_course_name_must_not_be_blank() {
        assert_eq!(validate_course_name(" Anthro 1000 ").ok(), Some("Anthro 1000"));
        assert!(matches!(
            validate_course_name("   "),
            Err(EnrollmentError::MissingField { .. })
        ));
    }
}
