use super::*;

/// Tests adding a canteen to an existing school.
///
/// Expected: Ok with the canteen stored under the school
#[tokio::test]
async fn adds_canteen() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, _) = factory::helpers::create_canteen_with_dependencies(db).await?;

    let service = CanteenService::new(db);
    let created = service
        .create(school.id, Canteen::new("Cantina do F", None).unwrap())
        .await?;

    assert!(created.id.is_some());
    assert_eq!(service.get_all(school.id).await?.len(), 2);

    Ok(())
}

/// Tests adding a canteen whose name only differs in case from an existing one.
///
/// Expected: Err(FieldErr) and no canteen written
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    factory::canteen::CanteenFactory::new(db, school.id)
        .name("Cantina do H")
        .build()
        .await?;

    let result = CanteenService::new(db)
        .create(school.id, Canteen::new("cantina do h", None).unwrap())
        .await;

    assert!(matches!(result, Err(AppError::FieldErr(ref err)) if err.field == "canteens"));
    assert_eq!(entity::prelude::Canteen::find().count(db).await?, 1);

    Ok(())
}

/// Tests adding a canteen to a school that does not exist.
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

    let result = CanteenService::new(db)
        .create(3, Canteen::new("Cantina do F", None).unwrap())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
