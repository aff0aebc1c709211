use super::*;

/// Tests creating the first menu of a day.
///
/// Verifies that a menu entry for the day is created along with the menu and
/// its dishes.
///
/// Expected: Ok with menu, entry and dishes stored
#[tokio::test]
async fn creates_menu_and_day_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();

    let repo = MenuRepository::new(db);
    let created = repo.create(canteen.id, date, &lunch()).await?;

    assert!(created.id.is_some());
    assert_eq!(created.menu_type, MenuType::Lunch);
    assert_eq!(created.dishes().len(), 2);
    assert_eq!(created.dishes()[1].dish_type, DishType::Vegetarian);
    assert!(created.dishes().iter().all(|d| d.id.is_some()));

    let entries = entity::prelude::MenuEntry::find().all(db).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].canteen_id, canteen.id);
    assert_eq!(entries[0].date, date);

    Ok(())
}

/// Tests creating a second menu on the same day.
///
/// Expected: Ok with the existing day entry reused
#[tokio::test]
async fn reuses_day_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();

    let repo = MenuRepository::new(db);
    repo.create(canteen.id, date, &lunch()).await?;
    repo.create(canteen.id, date, &dinner()).await?;

    assert_eq!(entity::prelude::MenuEntry::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Menu::find().count(db).await?, 2);
    assert_eq!(entity::prelude::Dish::find().count(db).await?, 3);

    Ok(())
}

/// Tests storing a second lunch on a day that already has one.
///
/// Expected: Err with a unique constraint violation and nothing else written
#[tokio::test]
async fn second_menu_of_same_type_violates_unique_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();

    let repo = MenuRepository::new(db);
    repo.create(canteen.id, date, &lunch()).await?;

    let result = repo.create(canteen.id, date, &lunch()).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::MenuEntry::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Menu::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Dish::find().count(db).await?, 2);

    Ok(())
}
