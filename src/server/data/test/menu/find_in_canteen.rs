use super::*;

/// Tests fetching a menu through the canteen it was filed under.
///
/// Expected: Ok(Some) with the menu and its dishes
#[tokio::test]
async fn returns_menu_of_canteen() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, canteen, _, menu, dish) = factory::helpers::create_menu_with_dependencies(db).await?;

    let repo = MenuRepository::new(db);
    let found = repo.find_in_canteen(canteen.id, menu.id).await?.unwrap();

    assert_eq!(found.id, Some(menu.id));
    assert_eq!(found.menu_type, MenuType::Lunch);
    assert_eq!(found.dishes().len(), 1);
    assert_eq!(found.dishes()[0].id, Some(dish.id));

    Ok(())
}

/// Tests fetching a menu through a canteen that does not own it.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_canteen() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, _, _, menu, _) = factory::helpers::create_menu_with_dependencies(db).await?;
    let other = factory::create_canteen(db, school.id).await?;

    let repo = MenuRepository::new(db);

    assert!(repo.find_in_canteen(other.id, menu.id).await?.is_none());

    Ok(())
}
