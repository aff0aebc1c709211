use super::*;

/// Tests getting a menu served on a past day.
///
/// Expected: Ok, menu detail is not limited to today
#[tokio::test]
async fn gets_menu_from_past_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;
    let entry = factory::menu_entry::MenuEntryFactory::new(db, canteen.id)
        .date(chrono::NaiveDate::from_ymd_opt(2024, 1, 8).unwrap())
        .build()
        .await?;
    let menu = factory::create_menu(db, entry.id).await?;
    factory::create_dish(db, menu.id).await?;

    let found = MenuService::new(db)
        .get(school.id, canteen.id, menu.id)
        .await?;

    assert_eq!(found.id, Some(menu.id));
    assert_eq!(found.dishes().len(), 1);

    Ok(())
}

/// Tests getting a menu through a canteen that does not own it.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn menu_of_other_canteen_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, _, _, menu, _) = factory::helpers::create_menu_with_dependencies(db).await?;
    let other = factory::create_canteen(db, school.id).await?;

    let result = MenuService::new(db).get(school.id, other.id, menu.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
