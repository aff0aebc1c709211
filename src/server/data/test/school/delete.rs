use super::*;

/// Tests deleting a school that owns a full menu chain.
///
/// Verifies that the school, its canteens, menu entries, menus and dishes are all
/// removed.
///
/// Expected: Ok(true) and every table empty
#[tokio::test]
async fn deletes_school_and_everything_below_it() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, _, _, _, _) = factory::helpers::create_menu_with_dependencies(db).await?;

    let repo = SchoolRepository::new(db);
    let deleted = repo.delete(school.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::School::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Canteen::find().count(db).await?, 0);
    assert_eq!(entity::prelude::MenuEntry::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Menu::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Dish::find().count(db).await?, 0);

    Ok(())
}

/// Tests that deleting one school leaves other schools untouched.
///
/// Expected: Ok(true) with the other school and its canteen still stored
#[tokio::test]
async fn keeps_other_schools() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (doomed, _) = factory::helpers::create_canteen_with_dependencies(db).await?;
    let (kept, kept_canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;

    let repo = SchoolRepository::new(db);
    assert!(repo.delete(doomed.id).await?);

    assert!(entity::prelude::School::find_by_id(kept.id).one(db).await?.is_some());
    assert!(entity::prelude::Canteen::find_by_id(kept_canteen.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a school that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_school() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}
