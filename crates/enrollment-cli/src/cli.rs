//! Command-line definitions.

use clap::{Args, Parser, Subcommand};
use enrollment_common::models::student::StudentPayload;

#[derive(Debug, Parser)]
#[command(name = "enrollment", version, about = "Manage students, nicknames and course enrollments")]
pub struct Cli {
    /// Override `database.url` from configuration
    #[arg(long, global = true, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Print results as JSON instead of the pipe-separated listing
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create every table
    CreateAll,
    /// Drop every table
    DropAll,
    /// Add the sample students Joe and Mary
    AddStudents,
    /// Give Joe the nicknames Jojo and Joey
    AddNicknames,
    /// Rename Joe to Joseph
    UpdateStudent,
    /// Show Joe
    SelectStudent,
    /// Show every student
    SelectStudents,
    /// Delete Joe
    DeleteStudent,
    /// Add the sample courses Anthro 1000 and English 1100
    AddCourses,
    /// Enroll Joe in both sample courses and Mary in Anthro 1000
    EnrollStudents,
    /// Show both sample course rosters
    ShowCourseEnrollments,
    /// Show Joe's courses
    ShowStudentEnrollments,

    /// Student records
    #[command(subcommand)]
    Student(StudentCommand),
    /// Course records
    #[command(subcommand)]
    Course(CourseCommand),
    /// Individual nicknames
    #[command(subcommand)]
    Nickname(NicknameCommand),
}

#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// Add a student with its nicknames and courses
    Add(StudentArgs),
    /// Replace a student's fields, nicknames and courses
    Update {
        id: i64,
        #[command(flatten)]
        args: StudentArgs,
    },
    /// Delete a student and everything it owns
    Delete { id: i64 },
    /// Show one student
    Show { id: i64 },
    /// Show every student
    List,
}

#[derive(Debug, Args)]
pub struct StudentArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub age: Option<i64>,
    /// Nickname, repeatable; order is kept
    #[arg(long = "nick")]
    pub nick_names: Vec<String>,
    /// Course id, repeatable
    #[arg(long = "course")]
    pub course_ids: Vec<i64>,
}

impl From<StudentArgs> for StudentPayload {
    fn from(args: StudentArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            age: args.age,
            nick_names: args.nick_names,
            course_ids: args.course_ids,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    Add { name: String },
    Rename { id: i64, name: String },
    Delete { id: i64 },
    List,
    /// Show the students enrolled in a course
    Roster { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum NicknameCommand {
    Add { student_id: i64, nick_name: String },
    Delete { id: i64 },
}
