use super::*;

/// Tests fetching a canteen through its owning school.
///
/// Expected: Ok(Some) with the canteen and its location
#[tokio::test]
async fn returns_canteen_of_school() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let canteen = factory::canteen::CanteenFactory::new(db, school.id)
        .location(38.7, -9.1)
        .build()
        .await?;

    let repo = CanteenRepository::new(db);
    let found = repo.find_in_school(school.id, canteen.id).await?.unwrap();

    assert_eq!(found.id, Some(canteen.id));
    assert_eq!(found.name, canteen.name);
    assert_eq!(
        found.location,
        Some(GeographicalLocation {
            latitude: 38.7,
            longitude: -9.1
        })
    );

    Ok(())
}

/// Tests fetching a canteen through a school that does not own it.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_school() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;
    let other = factory::create_school(db).await?;

    let repo = CanteenRepository::new(db);

    assert!(repo.find_in_school(other.id, canteen.id).await?.is_none());

    Ok(())
}
