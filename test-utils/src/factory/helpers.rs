//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique default names and acronyms across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a school with one canteen.
///
/// # Returns
/// - `Ok((school, canteen))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_canteen_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::school::Model, entity::canteen::Model), DbErr> {
    let school = crate::factory::school::create_school(db).await?;
    let canteen = crate::factory::canteen::create_canteen(db, school.id).await?;

    Ok((school, canteen))
}

/// Creates a complete chain from school down to a single dish.
///
/// This convenience method creates:
/// 1. School
/// 2. Canteen
/// 3. Menu entry for today
/// 4. Lunch menu
/// 5. Dish
///
/// # Returns
/// - `Ok((school, canteen, entry, menu, dish))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_menu_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::school::Model,
        entity::canteen::Model,
        entity::menu_entry::Model,
        entity::menu::Model,
        entity::dish::Model,
    ),
    DbErr,
> {
    let (school, canteen) = create_canteen_with_dependencies(db).await?;
    let entry = crate::factory::menu_entry::create_menu_entry(db, canteen.id).await?;
    let menu = crate::factory::menu::create_menu(db, entry.id).await?;
    let dish = crate::factory::dish::create_dish(db, menu.id).await?;

    Ok((school, canteen, entry, menu, dish))
}
