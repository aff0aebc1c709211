use super::*;

/// Tests listing every stored school.
///
/// Expected: Ok with schools in insertion order, each with its own canteens
#[tokio::test]
async fn returns_all_schools_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_canteen_with_dependencies(db).await?;
    let (second, _) = factory::helpers::create_canteen_with_dependencies(db).await?;
    factory::create_canteen(db, second.id).await?;

    let repo = SchoolRepository::new(db);
    let schools = repo.get_all().await?;

    assert_eq!(schools.len(), 2);
    assert_eq!(schools[0].id, Some(first.id));
    assert_eq!(schools[0].canteens().len(), 1);
    assert_eq!(schools[1].id, Some(second.id));
    assert_eq!(schools[1].canteens().len(), 2);

    Ok(())
}

/// Tests listing schools from an empty table.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_without_schools() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
