//! Registrar — transactional student and course writes.
//!
//! A student is always written together with its nicknames and enrollments:
//! validation, the row, and both child sets commit in one transaction or not at all.

use enrollment_common::error::{EnrollmentError, EnrollmentResult};
use enrollment_common::models::{
    course::Course,
    student::{StudentDetail, StudentPayload},
};
use enrollment_common::validation::validate_course_name;

use crate::Database;
use crate::relationships::{replace_nicknames_in, set_enrollments_in, student_detail_in};
use crate::repository::{courses, enrollments, nicknames, students};
use crate::validation::validate_in;

/// Validate and insert a new student with its nicknames and enrollments.
pub async fn add_student(db: &Database, payload: StudentPayload) -> EnrollmentResult<StudentDetail> {
    let mut tx = db.begin_write().await?;

    let new = validate_in(&mut tx, payload, None).await?.into_result()?;
    let student = students::create(&mut *tx, &new.name, &new.email, new.age).await?;
    replace_nicknames_in(&mut tx, student.id, &new.nick_names).await?;
    set_enrollments_in(&mut tx, student.id, &new.course_ids).await?;
    let detail = student_detail_in(&mut tx, student.id).await?;

    tx.commit().await?;
    tracing::info!(student_id = student.id, email = %student.email, "Student added");
    Ok(detail)
}

/// Validate and overwrite a student, replacing its nicknames and enrollments wholesale.
pub async fn update_student(
    db: &Database,
    student_id: i64,
    payload: StudentPayload,
) -> EnrollmentResult<StudentDetail> {
    let mut tx = db.begin_write().await?;

    if !students::exists(&mut *tx, student_id).await? {
        return Err(EnrollmentError::not_found("Student", student_id));
    }

    let new = validate_in(&mut tx, payload, Some(student_id))
        .await?
        .into_result()?;
    students::update(&mut *tx, student_id, &new.name, &new.email, new.age)
        .await?
        .ok_or(EnrollmentError::not_found("Student", student_id))?;
    replace_nicknames_in(&mut tx, student_id, &new.nick_names).await?;
    set_enrollments_in(&mut tx, student_id, &new.course_ids).await?;
    let detail = student_detail_in(&mut tx, student_id).await?;

    tx.commit().await?;
    tracing::info!(student_id, "Student updated");
    Ok(detail)
}

/// Delete a student together with its nicknames and enrollments.
pub async fn remove_student(db: &Database, student_id: i64) -> EnrollmentResult<()> {
    let mut tx = db.begin_write().await?;

    let nick_count = nicknames::delete_for_student(&mut *tx, student_id).await?;
    let enrollment_count = enrollments::delete_for_student(&mut *tx, student_id).await?;
    if !students::delete(&mut *tx, student_id).await? {
        return Err(EnrollmentError::not_found("Student", student_id));
    }

    tx.commit().await?;
    tracing::info!(
        student_id,
        nicknames = nick_count,
        enrollments = enrollment_count,
        "Student removed"
    );
    Ok(())
}

/// Create a course. A name already in use surfaces as a constraint violation.
pub async fn add_course(db: &Database, name: &str) -> EnrollmentResult<Course> {
    let name = validate_course_name(name)?;
    let course = courses::create(&db.pool, name).await?;
    tracing::info!(course_id = course.id, name = %course.name, "Course added");
    Ok(course)
}

/// Rename a course.
pub async fn rename_course(db: &Database, course_id: i64, name: &str) -> EnrollmentResult<Course> {
    let name = validate_course_name(name)?;
    courses::rename(&db.pool, course_id, name)
        .await?
        .ok_or(EnrollmentError::not_found("Course", course_id))
}

/// Delete a course and drop it from every student's enrollments.
pub async fn remove_course(db: &Database, course_id: i64) -> EnrollmentResult<()> {
    let mut tx = db.begin_write().await?;

    let dropped = enrollments::delete_for_course(&mut *tx, course_id).await?;
    if !courses::delete(&mut *tx, course_id).await? {
        return Err(EnrollmentError::not_found("Course", course_id));
    }

    tx.commit().await?;
    tracing::info!(course_id, enrollments = dropped, "Course removed");
    Ok(())
}

/// Delete one nickname by id.
pub async fn remove_nickname(db: &Database, nickname_id: i64) -> EnrollmentResult<()> {
    if !nicknames::delete(&db.pool, nickname_id).await? {
        return Err(EnrollmentError::not_found("Nickname", nickname_id));
    }
    tracing::debug!(nickname_id, "Nickname removed");
    Ok(())
}
