use super::*;

/// Tests listing today's menus when none were filed.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn no_menus_today_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;

    let result = MenuService::new(db)
        .get_available(school.id, canteen.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing today's menus after filing one.
///
/// Expected: Ok with the filed menu only
#[tokio::test]
async fn lists_todays_menus() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;

    let service = MenuService::new(db);
    service.create(school.id, canteen.id, dinner()).await?;

    let menus = service.get_available(school.id, canteen.id).await?;

    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].menu_type, MenuType::Dinner);

    Ok(())
}
