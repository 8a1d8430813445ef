//! Student model — the entity everything else hangs off.
//!
//! A student owns its nicknames outright and is linked to courses through
//! the `student_courses` join table.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::course::Course;

/// A persisted student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    /// System-assigned id, never reused
    pub id: i64,

    pub name: String,

    /// Unique across all students, always contains '@'
    pub email: String,

    pub age: i64,
}

/// A student with its nicknames and enrolled courses, both in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDetail {
    #[serde(flatten)]
    pub student: Student,
    pub nick_names: Vec<String>,
    pub courses: Vec<Course>,
}

impl fmt::Display for StudentDetail {
    /// `id|name|email|age|[nick,nick,]|[course,course,]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.student;
        write!(f, "{}|{}|{}|{}|[", s.id, s.name, s.email, s.age)?;
        for nick in &self.nick_names {
            write!(f, "{nick},")?;
        }
        write!(f, "]|[")?;
        for course in &self.courses {
            write!(f, "{},", course.name)?;
        }
        write!(f, "]")
    }
}

/// Candidate student submitted for add or edit, before validation.
///
/// Every scalar is optional so a missing field can be reported instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct StudentPayload {
    #[validate(required(code = "missing_field", message = "Name is required"))]
    pub name: Option<String>,

    #[validate(
        required(code = "missing_field", message = "Email is required"),
        contains(pattern = "@", code = "malformed_email", message = "Email must contain '@'")
    )]
    pub email: Option<String>,

    #[validate(required(code = "missing_field", message = "Age is required"))]
    pub age: Option<i64>,

    /// Replaces the student's whole nickname set, in this order
    #[serde(default)]
    pub nick_names: Vec<String>,

    /// Replaces the student's whole course set
    #[serde(default)]
    pub course_ids: Vec<i64>,
}

impl StudentPayload {
    pub fn new(name: &str, email: &str, age: i64) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            age: Some(age),
            ..Self::default()
        }
    }

    pub fn with_nick_names<I, S>(mut self, nick_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nick_names = nick_names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_course_ids(mut self, course_ids: impl IntoIterator<Item = i64>) -> Self {
        self.course_ids = course_ids.into_iter().collect();
        self
    }

    /// Trim text, treat blank scalars as absent, and drop blank nickname entries.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            name: clean(self.name),
            email: clean(self.email),
            age: self.age,
            nick_names: self
                .nick_names
                .into_iter()
                .filter_map(|n| clean(Some(n)))
                .collect(),
            course_ids: self.course_ids,
        }
    }

    /// Convert into a [`NewStudent`] when every required field is present.
    ///
    /// Only meaningful after validation accepted the payload; format rules are not rechecked.
    pub fn into_new_student(self) -> Option<NewStudent> {
        let payload = self.normalized();
        match (payload.name, payload.email, payload.age) {
            (Some(name), Some(email), Some(age)) => Some(NewStudent {
                name,
                email,
                age,
                nick_names: payload.nick_names,
                course_ids: payload.course_ids,
            }),
            _ => None,
        }
    }
}

/// An accepted student payload, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub nick_names: Vec<String>,
    pub course_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joe() -> Student {
        Student {
            id: 1,
            name: "Joe".into(),
            email: "joe@weber.edu".into(),
            age: 21,
        }
    }

    #[test]
    fn test_detail_display_matches_listing_format() {
        let detail = StudentDetail {
            student: joe(),
            nick_names: vec!["Jojo".into(), "Joey".into()],
            courses: vec![Course {
                id: 1,
                name: "Anthro 1000".into(),
            }],
        };
        assert_eq!(
            detail.to_string(),
            "1|Joe|joe@weber.edu|21|[Jojo,Joey,]|[Anthro 1000,]"
        );
    }

    #[test]
    fn test_detail_display_without_children() {
        let detail = StudentDetail {
            student: joe(),
            nick_names: vec![],
            courses: vec![],
        };
        assert_eq!(detail.to_string(), "1|Joe|joe@weber.edu|21|[]|[]");
    }

    #[test]
    fn test_normalized_trims_and_drops_blanks() {
        let payload = StudentPayload {
            name: Some("  Mary ".into()),
            email: Some("   ".into()),
            age: Some(22),
            nick_names: vec!["Maria".into(), " ".into(), " Mimi ".into()],
            course_ids: vec![2],
        }
        .normalized();

        assert_eq!(payload.name.as_deref(), Some("Mary"));
        assert_eq!(payload.email, None);
        assert_eq!(payload.nick_names, vec!["Maria", "Mimi"]);
        assert_eq!(payload.course_ids, vec![2]);
    }

    #[test]
    fn test_into_new_student_requires_all_scalars() {
        assert!(StudentPayload::default().into_new_student().is_none());

        let new = StudentPayload::new("Joe", "joe@weber.edu", 21)
            .with_nick_names(["Jojo"])
            .with_course_ids([1, 2])
            .into_new_student()
            .expect("complete payload");
        assert_eq!(new.name, "Joe");
        assert_eq!(new.nick_names, vec!["Jojo"]);
        assert_eq!(new.course_ids, vec![1, 2]);
    }

    #[test]
    fn test_payload_deserializes_with_missing_fields() {
        let payload: StudentPayload =
            serde_json::from_str(r#"{"email": "no-at-sign"}"#).expect("valid json");
        assert!(payload.name.is_none());
        assert!(payload.nick_names.is_empty());
        assert_eq!(payload.email.as_deref(), Some("no-at-sign"));
    }
}
