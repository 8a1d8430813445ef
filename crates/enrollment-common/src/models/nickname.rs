//! Nickname model — an alternate name exclusively owned by one student.

use serde::{Deserialize, Serialize};

/// A nickname row. `student_id` is never null; nicknames die with their student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Nickname {
    pub id: i64,
    pub nick_name: String,
    pub student_id: i64,
}
