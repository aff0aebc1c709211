use super::*;

/// Tests creating a canteen with a location under an existing school.
///
/// Expected: Ok with canteen stored under the school
#[tokio::test]
async fn creates_canteen_with_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let canteen = Canteen::new(
        "Cantina do H",
        Some(GeographicalLocation::new(41.1780, -8.6080).unwrap()),
    )
    .unwrap();

    let repo = CanteenRepository::new(db);
    let created = repo.create(school.id, &canteen).await?;

    assert!(created.id.is_some());
    assert_eq!(created.name, "Cantina do H");

    let stored = entity::prelude::Canteen::find_by_id(created.id.unwrap())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.school_id, school.id);
    assert_eq!(stored.latitude, Some(41.1780));
    assert_eq!(stored.longitude, Some(-8.6080));

    Ok(())
}

/// Tests creating a canteen without a location.
///
/// Expected: Ok with both coordinate columns null
#[tokio::test]
async fn creates_canteen_without_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let canteen = Canteen::new("Bar do F", None).unwrap();

    let repo = CanteenRepository::new(db);
    let created = repo.create(school.id, &canteen).await?;

    assert!(created.location.is_none());

    let stored = entity::prelude::Canteen::find_by_id(created.id.unwrap())
        .one(db)
        .await?
        .unwrap();
    assert!(stored.latitude.is_none());
    assert!(stored.longitude.is_none());

    Ok(())
}
