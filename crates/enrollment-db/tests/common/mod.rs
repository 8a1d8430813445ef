#![allow(dead_code)]

use enrollment_common::models::{course::Course, student::StudentPayload};
use enrollment_db::{Database, registrar};

pub async fn db() -> Database {
    Database::in_memory().await.expect("in-memory database")
}

pub async fn add_joe(db: &Database) -> i64 {
    registrar::add_student(db, StudentPayload::new("Joe", "joe@weber.edu", 21))
        .await
        .expect("add Joe")
        .student
        .id
}

pub async fn add_mary(db: &Database) -> i64 {
    registrar::add_student(db, StudentPayload::new("Mary", "mary@weber.edu", 22))
        .await
        .expect("add Mary")
        .student
        .id
}

pub async fn add_courses(db: &Database) -> (Course, Course) {
    let anthro = registrar::add_course(db, "Anthro 1000")
        .await
        .expect("add Anthro");
    let english = registrar::add_course(db, "English 1100")
        .await
        .expect("add English");
    (anthro, english)
}
