//! # enrollment
//!
//! Command-line front end over the enrollment store. Loads configuration,
//! opens the database explicitly, runs one command, and closes the pool.

mod cli;
mod output;
mod tutorial;

use anyhow::Result;
use clap::Parser;
use enrollment_common::{config::AppConfig, models::student::StudentPayload};
use enrollment_db::{Database, registrar, relationships, repository::courses};

use crate::cli::{Cli, Command, CourseCommand, NicknameCommand, StudentCommand};
use crate::output::Printer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if let Some(url) = cli.database_url.clone() {
        config.database.url = url;
    }

    // Initialize tracing (structured logging)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting enrollment v{}", env!("CARGO_PKG_VERSION"));

    let db = Database::connect(&config.database).await?;
    let out = Printer { json: cli.json };

    let result = run(&db, &out, cli.command).await;
    db.close().await;
    result
}

async fn run(db: &Database, out: &Printer, command: Command) -> Result<()> {
    match command {
        Command::CreateAll => {
            db.migrate().await?;
            out.message("DB created");
        }
        Command::DropAll => {
            db.drop_all().await?;
            out.message("DB dropped");
        }
        Command::AddStudents => tutorial::add_students(db, out).await?,
        Command::AddNicknames => tutorial::add_nicknames(db, out).await?,
        Command::UpdateStudent => tutorial::update_student(db, out).await?,
        Command::SelectStudent => tutorial::select_student(db, out).await?,
        Command::SelectStudents => {
            out.students(&relationships::all_student_details(db).await?)?
        }
        Command::DeleteStudent => tutorial::delete_student(db, out).await?,
        Command::AddCourses => tutorial::add_courses(db, out).await?,
        Command::EnrollStudents => tutorial::enroll_students(db, out).await?,
        Command::ShowCourseEnrollments => tutorial::show_course_enrollments(db, out).await?,
        Command::ShowStudentEnrollments => tutorial::show_student_enrollments(db, out).await?,
        Command::Student(cmd) => run_student(db, out, cmd).await?,
        Command::Course(cmd) => run_course(db, out, cmd).await?,
        Command::Nickname(cmd) => run_nickname(db, out, cmd).await?,
    }
    Ok(())
}

async fn run_student(db: &Database, out: &Printer, command: StudentCommand) -> Result<()> {
    match command {
        StudentCommand::Add(args) => {
            let detail = registrar::add_student(db, StudentPayload::from(args)).await?;
            out.student(&detail)
        }
        StudentCommand::Update { id, args } => {
            let detail = registrar::update_student(db, id, StudentPayload::from(args)).await?;
            out.student(&detail)
        }
        StudentCommand::Delete { id } => {
            registrar::remove_student(db, id).await?;
            out.message(&format!("Student {id} deleted"));
            Ok(())
        }
        StudentCommand::Show { id } => out.student(&relationships::student_detail(db, id).await?),
        StudentCommand::List => out.students(&relationships::all_student_details(db).await?),
    }
}

async fn run_course(db: &Database, out: &Printer, command: CourseCommand) -> Result<()> {
    match command {
        CourseCommand::Add { name } => {
            let course = registrar::add_course(db, &name).await?;
            out.course_list(&[course])
        }
        CourseCommand::Rename { id, name } => {
            let course = registrar::rename_course(db, id, &name).await?;
            out.course_list(&[course])
        }
        CourseCommand::Delete { id } => {
            registrar::remove_course(db, id).await?;
            out.message(&format!("Course {id} deleted"));
            Ok(())
        }
        CourseCommand::List => out.course_list(&courses::list_all(&db.pool).await?),
        CourseCommand::Roster { id } => out.roster(&relationships::course_roster(db, id).await?),
    }
}

async fn run_nickname(db: &Database, out: &Printer, command: NicknameCommand) -> Result<()> {
    match command {
        NicknameCommand::Add {
            student_id,
            nick_name,
        } => {
            relationships::add_nickname(db, student_id, &nick_name).await?;
            out.student(&relationships::student_detail(db, student_id).await?)
        }
        NicknameCommand::Delete { id } => {
            registrar::remove_nickname(db, id).await?;
            out.message(&format!("Nickname {id} deleted"));
            Ok(())
        }
    }
}
