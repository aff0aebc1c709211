use super::*;

/// Tests filing today's lunch and dinner for a canteen.
///
/// Expected: Ok for both, sharing one menu entry
#[tokio::test]
async fn files_one_menu_per_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;

    let service = MenuService::new(db);
    let lunch = service.create(school.id, canteen.id, lunch()).await?;
    let dinner = service.create(school.id, canteen.id, dinner()).await?;

    assert_eq!(lunch.menu_type, MenuType::Lunch);
    assert_eq!(dinner.menu_type, MenuType::Dinner);
    assert_eq!(entity::prelude::MenuEntry::find().count(db).await?, 1);

    Ok(())
}

/// Tests filing a second lunch for the same canteen today.
///
/// Expected: Err(FieldErr) and only the first menu stored
#[tokio::test]
async fn rejects_second_menu_of_same_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;

    let service = MenuService::new(db);
    service.create(school.id, canteen.id, lunch()).await?;

    let result = service.create(school.id, canteen.id, lunch()).await;

    assert!(matches!(result, Err(AppError::FieldErr(ref err)) if err.field == "menus"));
    assert_eq!(entity::prelude::Menu::find().count(db).await?, 1);

    Ok(())
}

/// Tests filing a menu through a school that does not own the canteen.
///
/// Expected: Err(NotFound) and nothing stored
#[tokio::test]
async fn broken_chain_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;
    let other = factory::create_school(db).await?;

    let result = MenuService::new(db)
        .create(other.id, canteen.id, lunch())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Menu::find().count(db).await?, 0);

    Ok(())
}

/// Tests two concurrent requests filing today's lunch for the same canteen.
///
/// Expected: one Ok and one Err(FieldErr) on the menus field, one menu stored
#[tokio::test]
async fn concurrent_same_type_files_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;

    let service = MenuService::new(db);
    let (first, second) = tokio::join!(
        service.create(school.id, canteen.id, lunch()),
        service.create(school.id, canteen.id, lunch())
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(AppError::FieldErr(err)) if err.field == "menus")));
    assert_eq!(entity::prelude::MenuEntry::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Menu::find().count(db).await?, 1);

    Ok(())
}
