//! Nickname repository — rows owned by exactly one student.

use enrollment_common::models::nickname::Nickname;
use sqlx::SqliteExecutor;

/// Attach a nickname to a student.
pub async fn create<'e, E>(
    executor: E,
    student_id: i64,
    nick_name: &str,
) -> Result<Nickname, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Nickname>(
        r#"
        INSERT INTO student_nick_names (nick_name, student_id)
        VALUES (?, ?)
        RETURNING id, nick_name, student_id
        "#,
    )
    .bind(nick_name)
    .bind(student_id)
    .fetch_one(executor)
    .await
}

/// Find a nickname by id.
pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Nickname>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Nickname>(
        "SELECT id, nick_name, student_id FROM student_nick_names WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// List a student's nicknames in the order they were added.
pub async fn list_for_student<'e, E>(
    executor: E,
    student_id: i64,
) -> Result<Vec<Nickname>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Nickname>(
        r#"
        SELECT id, nick_name, student_id FROM student_nick_names
        WHERE student_id = ?
        ORDER BY id
        "#,
    )
    .bind(student_id)
    .fetch_all(executor)
    .await
}

/// Change a nickname's text. Returns `None` when the id does not exist.
pub async fn rename<'e, E>(
    executor: E,
    id: i64,
    nick_name: &str,
) -> Result<Option<Nickname>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Nickname>(
        r#"
        UPDATE student_nick_names SET nick_name = ?
        WHERE id = ?
        RETURNING id, nick_name, student_id
        "#,
    )
    .bind(nick_name)
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Delete one nickname.
pub async fn delete<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM student_nick_names WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete every nickname a student owns, returning how many went.
pub async fn delete_for_student<'e, E>(executor: E, student_id: i64) -> Result<u64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM student_nick_names WHERE student_id = ?")
        .bind(student_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Count nicknames pointing at a student id, whether or not the student still exists.
pub async fn count_for_student<'e, E>(executor: E, student_id: i64) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM student_nick_names WHERE student_id = ?")
        .bind(student_id)
        .fetch_one(executor)
        .await
}
