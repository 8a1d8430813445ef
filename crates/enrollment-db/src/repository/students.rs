//! Student repository — CRUD operations for student rows.

use enrollment_common::models::student::Student;
use sqlx::SqliteExecutor;

/// Insert a student and return it with its assigned id.
pub async fn create<'e, E>(
    executor: E,
    name: &str,
    email: &str,
    age: i64,
) -> Result<Student, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Student>(
        r#"
        INSERT INTO students (name, email, age)
        VALUES (?, ?, ?)
        RETURNING id, name, email, age
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(age)
    .fetch_one(executor)
    .await
}

/// Find a student by id.
pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Student>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Student>("SELECT id, name, email, age FROM students WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Find a student by email (exact match).
pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<Student>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Student>("SELECT id, name, email, age FROM students WHERE email = ?")
        .bind(email)
        .fetch_optional(executor)
        .await
}

/// Find every student with this name. Names are not unique.
pub async fn find_by_name<'e, E>(executor: E, name: &str) -> Result<Vec<Student>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Student>(
        "SELECT id, name, email, age FROM students WHERE name = ? ORDER BY id",
    )
    .bind(name)
    .fetch_all(executor)
    .await
}

/// List all students.
pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Student>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Student>("SELECT id, name, email, age FROM students ORDER BY id")
        .fetch_all(executor)
        .await
}

/// Overwrite a student's scalar fields. Returns `None` when the id does not exist.
pub async fn update<'e, E>(
    executor: E,
    id: i64,
    name: &str,
    email: &str,
    age: i64,
) -> Result<Option<Student>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Student>(
        r#"
        UPDATE students SET
            name = ?,
            email = ?,
            age = ?
        WHERE id = ?
        RETURNING id, name, email, age
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(age)
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Delete the student row only. Callers remove children first, see `registrar::remove_student`.
pub async fn delete<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM students WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Check whether a student exists.
pub async fn exists<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM students WHERE id = ?)")
        .bind(id)
        .fetch_one(executor)
        .await
}

/// Check whether `email` belongs to a student other than `except`.
pub async fn email_taken<'e, E>(
    executor: E,
    email: &str,
    except: Option<i64>,
) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM students WHERE email = ? AND (? IS NULL OR id <> ?))",
    )
    .bind(email)
    .bind(except)
    .bind(except)
    .fetch_one(executor)
    .await
}
