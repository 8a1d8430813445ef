//! The scripted sample steps: Joe, Mary, and two courses.
//!
//! Each step looks its rows up by unique field, so the steps can be run in
//! any order and fail with a readable message when a prerequisite is missing.

use anyhow::{Context, Result};
use enrollment_common::models::{course::Course, student::Student, student::StudentPayload};
use enrollment_db::{
    Database, registrar,
    relationships::{self, add_nickname, set_enrollments},
    repository::{courses, students},
};

use crate::output::Printer;

const JOE_EMAIL: &str = "joe@weber.edu";
const MARY_EMAIL: &str = "mary@weber.edu";
const ANTHRO: &str = "Anthro 1000";
const ENGLISH: &str = "English 1100";

async fn student_by_email(db: &Database, email: &str) -> Result<Student> {
    students::find_by_email(&db.pool, email)
        .await?
        .with_context(|| format!("no student with email {email}; run add-students first"))
}

async fn course_by_name(db: &Database, name: &str) -> Result<Course> {
    courses::find_by_name(&db.pool, name)
        .await?
        .with_context(|| format!("no course named {name}; run add-courses first"))
}

pub async fn add_students(db: &Database, out: &Printer) -> Result<()> {
    registrar::add_student(db, StudentPayload::new("Joe", JOE_EMAIL, 21)).await?;
    registrar::add_student(
        db,
        StudentPayload::new("Mary", MARY_EMAIL, 22).with_nick_names(["Maria"]),
    )
    .await?;
    out.message("Students named Joe and Mary added to DB");
    Ok(())
}

pub async fn add_nicknames(db: &Database, out: &Printer) -> Result<()> {
    let joe = student_by_email(db, JOE_EMAIL).await?;
    add_nickname(db, joe.id, "Jojo").await?;
    add_nickname(db, joe.id, "Joey").await?;
    out.message("Two nicknames added to Joe");
    Ok(())
}

/// Rename Joe, resubmitting his current nicknames and courses unchanged.
///
/// The detail read and the update are separate transactions, so a nickname or
/// enrollment change committed in between is overwritten by the stale copy.
pub async fn update_student(db: &Database, out: &Printer) -> Result<()> {
    let joe = student_by_email(db, JOE_EMAIL).await?;
    let current = relationships::student_detail(db, joe.id).await?;
    let payload = StudentPayload::new("Joseph", &joe.email, joe.age)
        .with_nick_names(current.nick_names)
        .with_course_ids(current.courses.iter().map(|c| c.id));
    registrar::update_student(db, joe.id, payload).await?;
    out.message("Student updated");
    Ok(())
}

pub async fn select_student(db: &Database, out: &Printer) -> Result<()> {
    let joe = student_by_email(db, JOE_EMAIL).await?;
    out.student(&relationships::student_detail(db, joe.id).await?)
}

pub async fn delete_student(db: &Database, out: &Printer) -> Result<()> {
    let joe = student_by_email(db, JOE_EMAIL).await?;
    registrar::remove_student(db, joe.id).await?;
    out.message("Joe deleted from DB");
    Ok(())
}

pub async fn add_courses(db: &Database, out: &Printer) -> Result<()> {
    registrar::add_course(db, ANTHRO).await?;
    registrar::add_course(db, ENGLISH).await?;
    out.message("Two courses added to DB");
    Ok(())
}

/// Add the sample enrollments on top of whatever each student already has.
///
/// Each student's current courses are read, then written back with the extras in a
/// second call. An enrollment change committed between the two is lost.
pub async fn enroll_students(db: &Database, out: &Printer) -> Result<()> {
    let anthro = course_by_name(db, ANTHRO).await?;
    let english = course_by_name(db, ENGLISH).await?;
    let joe = student_by_email(db, JOE_EMAIL).await?;
    let mary = student_by_email(db, MARY_EMAIL).await?;

    for (student, extra) in [(&joe, vec![anthro.id, english.id]), (&mary, vec![anthro.id])] {
        let mut ids: Vec<i64> = relationships::enrollments_of(db, student.id)
            .await?
            .iter()
            .map(|c| c.id)
            .collect();
        ids.extend(extra);
        set_enrollments(db, student.id, &ids).await?;
    }

    out.message("Joe and Mary enrolled");
    Ok(())
}

pub async fn show_course_enrollments(db: &Database, out: &Printer) -> Result<()> {
    let mut rosters = Vec::new();
    for name in [ANTHRO, ENGLISH] {
        let course = course_by_name(db, name).await?;
        rosters.push(relationships::course_roster(db, course.id).await?);
    }
    out.rosters(&rosters)
}

pub async fn show_student_enrollments(db: &Database, out: &Printer) -> Result<()> {
    let joe = student_by_email(db, JOE_EMAIL).await?;
    let courses = relationships::enrollments_of(db, joe.id).await?;
    out.courses(&format!("{} is enrolled in:", joe.name), &courses)
}
