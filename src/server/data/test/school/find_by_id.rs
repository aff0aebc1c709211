use super::*;

/// Tests fetching a school with its canteens.
///
/// Expected: Ok(Some) with canteens ordered by ID
#[tokio::test]
async fn returns_school_with_canteens() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let first = factory::canteen::CanteenFactory::new(db, school.id)
        .name("Cantina do H")
        .build()
        .await?;
    let second = factory::canteen::CanteenFactory::new(db, school.id)
        .name("Bar do F")
        .location(41.0, -8.0)
        .build()
        .await?;

    let repo = SchoolRepository::new(db);
    let found = repo.find_by_id(school.id).await?.unwrap();

    assert_eq!(found.id, Some(school.id));
    assert_eq!(found.acronym, school.acronym);
    let ids: Vec<_> = found.canteens().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![Some(first.id), Some(second.id)]);
    assert!(found.canteens()[1].location.is_some());

    Ok(())
}

/// Tests fetching a school that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_school() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
