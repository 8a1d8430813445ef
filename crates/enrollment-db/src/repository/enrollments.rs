//! Enrollment repository — rows of the `student_courses` join table.

use enrollment_common::models::{course::Course, student::Student};
use sqlx::SqliteExecutor;

/// Link a student to a course.
pub async fn insert<'e, E>(executor: E, student_id: i64, course_id: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("INSERT INTO student_courses (student_id, course_id) VALUES (?, ?)")
        .bind(student_id)
        .bind(course_id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Remove every enrollment of a student.
pub async fn delete_for_student<'e, E>(executor: E, student_id: i64) -> Result<u64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM student_courses WHERE student_id = ?")
        .bind(student_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Remove every enrollment in a course.
pub async fn delete_for_course<'e, E>(executor: E, course_id: i64) -> Result<u64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM student_courses WHERE course_id = ?")
        .bind(course_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Courses a student is enrolled in, in enrollment order.
pub async fn courses_of<'e, E>(executor: E, student_id: i64) -> Result<Vec<Course>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Course>(
        r#"
        SELECT c.id, c.name FROM courses c
        JOIN student_courses sc ON sc.course_id = c.id
        WHERE sc.student_id = ?
        ORDER BY sc.id
        "#,
    )
    .bind(student_id)
    .fetch_all(executor)
    .await
}

/// Students enrolled in a course, in enrollment order.
pub async fn students_of<'e, E>(executor: E, course_id: i64) -> Result<Vec<Student>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Student>(
        r#"
        SELECT s.id, s.name, s.email, s.age FROM students s
        JOIN student_courses sc ON sc.student_id = s.id
        WHERE sc.course_id = ?
        ORDER BY sc.id
        "#,
    )
    .bind(course_id)
    .fetch_all(executor)
    .await
}

/// Count enrollment rows referencing a student id.
pub async fn count_for_student<'e, E>(executor: E, student_id: i64) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM student_courses WHERE student_id = ?")
        .bind(student_id)
        .fetch_one(executor)
        .await
}
