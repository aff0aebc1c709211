use super::*;

/// Tests listing schools when none are stored.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn empty_store_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SchoolService::new(db).get_all().await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing stored schools.
///
/// Expected: Ok with every school
#[tokio::test]
async fn lists_schools() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_school(db).await?;
    factory::create_school(db).await?;

    let schools = SchoolService::new(db).get_all().await?;

    assert_eq!(schools.len(), 2);

    Ok(())
}
