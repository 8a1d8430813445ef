//! Result printing — pipe-separated listing by default, JSON with `--json`.

use anyhow::Result;
use enrollment_common::models::{
    course::{Course, CourseRoster},
    student::StudentDetail,
};
use serde::Serialize;

/// Writes command results to stdout in the selected format.
pub struct Printer {
    pub json: bool,
}

impl Printer {
    /// A one-line status message, or `{"message": ...}` in JSON mode.
    pub fn message(&self, message: &str) {
        if self.json {
            println!("{}", serde_json::json!({ "message": message }));
        } else {
            println!("{message}");
        }
    }

    /// One student in the pipe format.
    pub fn student(&self, detail: &StudentDetail) -> Result<()> {
        if self.json {
            return self.print_json(detail);
        }
        println!("{detail}");
        Ok(())
    }

    /// Every student, one per line. JSON mode prints a single array.
    pub fn students(&self, details: &[StudentDetail]) -> Result<()> {
        if self.json {
            return self.print_json(&details);
        }
        for detail in details {
            println!("{detail}");
        }
        Ok(())
    }

    /// A course and its enrolled students.
    pub fn roster(&self, roster: &CourseRoster) -> Result<()> {
        if self.json {
            return self.print_json(roster);
        }
        println!("{roster}");
        Ok(())
    }

    /// Course rosters, one per line.
    pub fn rosters(&self, rosters: &[CourseRoster]) -> Result<()> {
        if self.json {
            return self.print_json(&rosters);
        }
        for roster in rosters {
            println!("{roster}");
        }
        Ok(())
    }

    /// `heading` then `name,name,` on one line.
    pub fn courses(&self, heading: &str, courses: &[Course]) -> Result<()> {
        if self.json {
            return self.print_json(&courses);
        }
        let names: String = courses.iter().map(|c| format!("{},", c.name)).collect();
        println!("{heading} {names}");
        Ok(())
    }

    /// `id|name` per course.
    pub fn course_list(&self, courses: &[Course]) -> Result<()> {
        if self.json {
            return self.print_json(&courses);
        }
        for course in courses {
            println!("{}|{}", course.id, course.name);
        }
        Ok(())
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
