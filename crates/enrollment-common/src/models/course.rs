//! Course model and its roster view.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::student::Student;

/// A course students can enroll in. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

/// A course together with the students enrolled in it, in enrollment order.
#[derive(Debug, Clone, Serialize)]
pub struct CourseRoster {
    #[serde(flatten)]
    pub course: Course,
    pub students: Vec<Student>,
}

impl fmt::Display for CourseRoster {
    /// `id|name|[student,student,]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|[", self.course.id, self.course.name)?;
        for student in &self.students {
            write!(f, "{},", student.name)?;
        }
        write!(f, "]")
    }
}
