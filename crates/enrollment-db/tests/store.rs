mod common;

use enrollment_common::error::EnrollmentError;
use enrollment_db::relationships::{add_nickname, set_enrollments};
use enrollment_db::repository::{courses, enrollments, nicknames, students};
use enrollment_db::registrar;

#[tokio::test]
async fn test_ids_assigned_in_insertion_order() {
    let db = common::db().await;
    let joe = common::add_joe(&db).await;
    let mary = common::add_mary(&db).await;
    assert_eq!(joe, 1);
    assert_eq!(mary, 2);

    let names: Vec<String> = students::list_all(&db.pool)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Joe", "Mary"]);
}

#[tokio::test]
async fn test_find_by_unique_fields() {
    let db = common::db().await;
    let joe = common::add_joe(&db).await;
    common::add_courses(&db).await;

    let found = students::find_by_email(&db.pool, "joe@weber.edu")
        .await
        .unwrap()
        .expect("Joe by email");
    assert_eq!(found.id, joe);
    assert!(students::find_by_email(&db.pool, "nobody@weber.edu")
        .await
        .unwrap()
        .is_none());
    assert_eq!(students::find_by_name(&db.pool, "Joe").await.unwrap().len(), 1);

    let english = courses::find_by_name(&db.pool, "English 1100")
        .await
        .unwrap()
        .expect("English by name");
    assert_eq!(english.id, 2);
    assert!(courses::find_by_id(&db.pool, 99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_overwrites_scalars() {
    let db = common::db().await;
    let joe = common::add_joe(&db).await;

    let updated = students::update(&db.pool, joe, "Joseph", "joe@weber.edu", 21)
        .await
        .unwrap()
        .expect("row exists");
    assert_eq!(updated.name, "Joseph");
    assert!(students::update(&db.pool, 42, "Nobody", "n@weber.edu", 1)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_delete_student_cascades_children() {
    let db = common::db().await;
    let joe = common::add_joe(&db).await;
    let mary = common::add_mary(&db).await;
    let (anthro, english) = common::add_courses(&db).await;

    add_nickname(&db, joe, "Jojo").await.unwrap();
    add_nickname(&db, joe, "Joey").await.unwrap();
    add_nickname(&db, mary, "Maria").await.unwrap();
    set_enrollments(&db, joe, &[anthro.id, english.id]).await.unwrap();
    set_enrollments(&db, mary, &[anthro.id]).await.unwrap();

    registrar::remove_student(&db, joe).await.unwrap();

    assert!(students::find_by_id(&db.pool, joe).await.unwrap().is_none());
    assert_eq!(nicknames::count_for_student(&db.pool, joe).await.unwrap(), 0);
    assert_eq!(enrollments::count_for_student(&db.pool, joe).await.unwrap(), 0);

    // Mary is untouched.
    assert_eq!(nicknames::count_for_student(&db.pool, mary).await.unwrap(), 1);
    let roster = enrollments::students_of(&db.pool, anthro.id).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, mary);
}

#[tokio::test]
async fn test_remove_missing_student_is_not_found() {
    let db = common::db().await;
    let err = registrar::remove_student(&db, 5).await.unwrap_err();
    assert!(matches!(err, EnrollmentError::NotFound { resource: "Student", id: 5 }));
}

#[tokio::test]
async fn test_remove_course_drops_enrollments() {
    let db = common::db().await;
    let joe = common::add_joe(&db).await;
    let (anthro, english) = common::add_courses(&db).await;
    set_enrollments(&db, joe, &[anthro.id, english.id]).await.unwrap();

    registrar::remove_course(&db, anthro.id).await.unwrap();

    let left = enrollments::courses_of(&db.pool, joe).await.unwrap();
    assert_eq!(left, vec![english]);
    assert!(matches!(
        registrar::remove_course(&db, anthro.id).await,
        Err(EnrollmentError::NotFound { resource: "Course", .. })
    ));
}

#[tokio::test]
async fn test_duplicate_course_name_is_constraint_violation() {
    let db = common::db().await;
    registrar::add_course(&db, "Anthro 1000").await.unwrap();

    let err = registrar::add_course(&db, "Anthro 1000").await.unwrap_err();
    assert_eq!(err.error_code(), "CONSTRAINT_VIOLATION");
    assert_eq!(courses::list_all(&db.pool).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_blank_course_name_is_missing_field() {
    let db = common::db().await;
    let err = registrar::add_course(&db, "  ").await.unwrap_err();
    assert!(matches!(err, EnrollmentError::MissingField { .. }));
}

#[tokio::test]
async fn test_raw_duplicate_email_insert_is_constraint_violation() {
    let db = common::db().await;
    common::add_joe(&db).await;

    let err: EnrollmentError = students::create(&db.pool, "Joe Two", "joe@weber.edu", 30)
        .await
        .unwrap_err()
        .into();
    assert!(matches!(err, EnrollmentError::ConstraintViolation { .. }));
}

#[tokio::test]
async fn test_rename_and_delete_nickname() {
    let db = common::db().await;
    let joe = common::add_joe(&db).await;
    let jojo = add_nickname(&db, joe, "Jojo").await.unwrap();

    let renamed = nicknames::rename(&db.pool, jojo.id, "JoJo")
        .await
        .unwrap()
        .expect("nickname exists");
    assert_eq!(renamed.nick_name, "JoJo");
    assert_eq!(renamed.student_id, joe);

    registrar::remove_nickname(&db, jojo.id).await.unwrap();
    assert!(nicknames::find_by_id(&db.pool, jojo.id).await.unwrap().is_none());
    assert!(matches!(
        registrar::remove_nickname(&db, jojo.id).await,
        Err(EnrollmentError::NotFound { resource: "Nickname", .. })
    ));
}

#[tokio::test]
async fn test_drop_all_then_migrate_starts_empty() {
    let db = common::db().await;
    common::add_joe(&db).await;
    common::add_courses(&db).await;

    db.drop_all().await.unwrap();
    assert!(students::list_all(&db.pool).await.is_err());

    db.migrate().await.unwrap();
    assert!(students::list_all(&db.pool).await.unwrap().is_empty());
    assert_eq!(common::add_joe(&db).await, 1);
    assert!(db.health_check().await);
}
