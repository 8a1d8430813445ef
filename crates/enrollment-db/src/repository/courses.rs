//! Course repository.

use enrollment_common::models::course::Course;
use sqlx::SqliteExecutor;

/// Create a new course.
pub async fn create<'e, E>(executor: E, name: &str) -> Result<Course, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Course>("INSERT INTO courses (name) VALUES (?) RETURNING id, name")
        .bind(name)
        .fetch_one(executor)
        .await
}

/// Find a course by id.
pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Course>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Find a course by its unique name.
pub async fn find_by_name<'e, E>(executor: E, name: &str) -> Result<Option<Course>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE name = ?")
        .bind(name)
        .fetch_optional(executor)
        .await
}

/// List all courses.
pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Course>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Course>("SELECT id, name FROM courses ORDER BY id")
        .fetch_all(executor)
        .await
}

/// Rename a course. Returns `None` when the id does not exist.
pub async fn rename<'e, E>(executor: E, id: i64, name: &str) -> Result<Option<Course>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Course>("UPDATE courses SET name = ? WHERE id = ? RETURNING id, name")
        .bind(name)
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Delete the course row only. Enrollment rows must be gone already.
pub async fn delete<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM courses WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
