use super::*;

/// Tests listing the canteens of an unknown school.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_school_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CanteenService::new(db).get_all(1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
