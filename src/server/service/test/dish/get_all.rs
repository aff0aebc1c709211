use super::*;

/// Tests listing the dishes of a menu.
///
/// Expected: Ok with every dish of the menu
#[tokio::test]
async fn lists_menu_dishes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, canteen, _, menu, _) = factory::helpers::create_menu_with_dependencies(db).await?;
    factory::dish::DishFactory::new(db, menu.id)
        .description("Arroz de Pato")
        .build()
        .await?;

    let dishes = DishService::new(db)
        .get_all(school.id, canteen.id, menu.id)
        .await?;

    assert_eq!(dishes.len(), 2);

    Ok(())
}
