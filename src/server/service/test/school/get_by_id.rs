use super::*;

/// Tests getting a school with its canteens.
///
/// Expected: Ok with the canteen attached
#[tokio::test]
async fn gets_school_with_canteens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;

    let found = SchoolService::new(db).get_by_id(school.id).await?;

    assert_eq!(found.id, Some(school.id));
    assert_eq!(found.canteens().len(), 1);
    assert_eq!(found.canteens()[0].name, canteen.name);

    Ok(())
}

/// Tests getting a school that does not exist.
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

    let result = SchoolService::new(db).get_by_id(7).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
