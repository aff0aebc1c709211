use super::*;

/// Tests getting a canteen through a school that does not own it.
///
/// Expected: Err(NotFound) even though both rows exist
#[tokio::test]
async fn canteen_of_other_school_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;
    let other = factory::create_school(db).await?;

    let service = CanteenService::new(db);
    let result = service.get(other.id, canteen.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests getting a canteen through its own school.
///
/// Expected: Ok with the canteen
#[tokio::test]
async fn gets_owned_canteen() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;

    let found = CanteenService::new(db).get(school.id, canteen.id).await?;

    assert_eq!(found.id, Some(canteen.id));
    assert_eq!(found.name, canteen.name);

    Ok(())
}
