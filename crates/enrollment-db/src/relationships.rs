//! Relationship management — student-owned nicknames and student/course enrollment.
//!
//! Each operation comes in two forms: a pool-level function that runs in its own
//! transaction, and an `_in` form that works on an open connection so the
//! registrar can compose several of them into one transaction. Replacements
//! are all-or-nothing: the old child set is deleted and the submitted one inserted.

use enrollment_common::error::{EnrollmentError, EnrollmentResult};
use enrollment_common::models::{
    course::{Course, CourseRoster},
    nickname::Nickname,
    student::{Student, StudentDetail},
};
use sqlx::SqliteConnection;

use crate::Database;
use crate::repository::{courses, enrollments, nicknames, students};

async fn require_student(conn: &mut SqliteConnection, student_id: i64) -> EnrollmentResult<Student> {
    students::find_by_id(&mut *conn, student_id)
        .await?
        .ok_or(EnrollmentError::not_found("Student", student_id))
}

async fn require_course(conn: &mut SqliteConnection, course_id: i64) -> EnrollmentResult<Course> {
    courses::find_by_id(&mut *conn, course_id)
        .await?
        .ok_or(EnrollmentError::not_found("Course", course_id))
}

// ── Nicknames ────────────────────────────────────────────────────────────────

/// Append one nickname to a student.
pub async fn add_nickname(db: &Database, student_id: i64, nick_name: &str) -> EnrollmentResult<Nickname> {
    let mut tx = db.begin_write().await?;
    let nickname = add_nickname_in(&mut tx, student_id, nick_name).await?;
    tx.commit().await?;
    Ok(nickname)
}

pub async fn add_nickname_in(
    conn: &mut SqliteConnection,
    student_id: i64,
    nick_name: &str,
) -> EnrollmentResult<Nickname> {
    require_student(conn, student_id).await?;
    let nickname = nicknames::create(&mut *conn, student_id, nick_name).await?;
    tracing::debug!(student_id, nickname_id = nickname.id, "Nickname added");
    Ok(nickname)
}

/// Replace a student's whole nickname set with `nick_names`, keeping their order.
pub async fn replace_nicknames(
    db: &Database,
    student_id: i64,
    nick_names: &[String],
) -> EnrollmentResult<Vec<Nickname>> {
    let mut tx = db.begin_write().await?;
    let replaced = replace_nicknames_in(&mut tx, student_id, nick_names).await?;
    tx.commit().await?;
    Ok(replaced)
}

pub async fn replace_nicknames_in(
    conn: &mut SqliteConnection,
    student_id: i64,
    nick_names: &[String],
) -> EnrollmentResult<Vec<Nickname>> {
    require_student(conn, student_id).await?;
    let removed = nicknames::delete_for_student(&mut *conn, student_id).await?;

    let mut inserted = Vec::with_capacity(nick_names.len());
    for nick_name in nick_names {
        inserted.push(nicknames::create(&mut *conn, student_id, nick_name).await?);
    }

    tracing::debug!(student_id, removed, inserted = inserted.len(), "Nicknames replaced");
    Ok(inserted)
}

/// A student's nicknames, in the order they were added.
pub async fn nicknames_of(db: &Database, student_id: i64) -> EnrollmentResult<Vec<String>> {
    let mut conn = db.pool.acquire().await?;
    require_student(&mut conn, student_id).await?;
    let rows = nicknames::list_for_student(&mut *conn, student_id).await?;
    Ok(rows.into_iter().map(|n| n.nick_name).collect())
}

// ── Enrollments ──────────────────────────────────────────────────────────────

/// Replace a student's whole course set with `course_ids`.
///
/// Duplicate ids collapse to their first occurrence. An unknown course aborts the
/// whole operation and leaves the previous enrollments untouched.
pub async fn set_enrollments(
    db: &Database,
    student_id: i64,
    course_ids: &[i64],
) -> EnrollmentResult<Vec<Course>> {
    let mut tx = db.begin_write().await?;
    let enrolled = set_enrollments_in(&mut tx, student_id, course_ids).await?;
    tx.commit().await?;
    Ok(enrolled)
}

pub async fn set_enrollments_in(
    conn: &mut SqliteConnection,
    student_id: i64,
    course_ids: &[i64],
) -> EnrollmentResult<Vec<Course>> {
    require_student(conn, student_id).await?;

    let mut wanted: Vec<Course> = Vec::with_capacity(course_ids.len());
    for &course_id in course_ids {
        if wanted.iter().any(|c| c.id == course_id) {
            continue;
        }
        wanted.push(require_course(conn, course_id).await?);
    }

    enrollments::delete_for_student(&mut *conn, student_id).await?;
    for course in &wanted {
        enrollments::insert(&mut *conn, student_id, course.id).await?;
    }

    tracing::debug!(student_id, courses = wanted.len(), "Enrollments replaced");
    Ok(wanted)
}

/// Courses a student is enrolled in, in enrollment order.
pub async fn enrollments_of(db: &Database, student_id: i64) -> EnrollmentResult<Vec<Course>> {
    let mut conn = db.pool.acquire().await?;
    require_student(&mut conn, student_id).await?;
    Ok(enrollments::courses_of(&mut *conn, student_id).await?)
}

/// Students enrolled in a course, in enrollment order.
pub async fn roster_of(db: &Database, course_id: i64) -> EnrollmentResult<Vec<Student>> {
    let mut conn = db.pool.acquire().await?;
    require_course(&mut conn, course_id).await?;
    Ok(enrollments::students_of(&mut *conn, course_id).await?)
}

// ── Detail views ─────────────────────────────────────────────────────────────

/// Load a student with nicknames and courses from one consistent snapshot.
pub async fn student_detail(db: &Database, student_id: i64) -> EnrollmentResult<StudentDetail> {
    let mut tx = db.pool.begin().await?;
    let detail = student_detail_in(&mut tx, student_id).await?;
    tx.commit().await?;
    Ok(detail)
}

pub async fn student_detail_in(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> EnrollmentResult<StudentDetail> {
    let student = require_student(conn, student_id).await?;
    let nick_names = nicknames::list_for_student(&mut *conn, student_id)
        .await?
        .into_iter()
        .map(|n| n.nick_name)
        .collect();
    let courses = enrollments::courses_of(&mut *conn, student_id).await?;
    Ok(StudentDetail {
        student,
        nick_names,
        courses,
    })
}

/// Every student with nicknames and courses, in insertion order.
pub async fn all_student_details(db: &Database) -> EnrollmentResult<Vec<StudentDetail>> {
    let mut tx = db.pool.begin().await?;
    let ids: Vec<i64> = students::list_all(&mut *tx)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();

    let mut details = Vec::with_capacity(ids.len());
    for id in ids {
        details.push(student_detail_in(&mut tx, id).await?);
    }
    tx.commit().await?;
    Ok(details)
}

/// Load a course with its enrolled students.
pub async fn course_roster(db: &Database, course_id: i64) -> EnrollmentResult<CourseRoster> {
    let mut tx = db.pool.begin().await?;
    let course = require_course(&mut tx, course_id).await?;
    let students = enrollments::students_of(&mut *tx, course_id).await?;
    tx.commit().await?;
    Ok(CourseRoster { course, students })
}
