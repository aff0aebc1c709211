pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_school_table;
mod m20251001_000002_create_canteen_table;
mod m20251001_000003_create_menu_entry_table;
mod m20251001_000004_create_menu_table;
mod m20251001_000005_create_dish_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_school_table::Migration),
            Box::new(m20251001_000002_create_canteen_table::Migration),
            Box::new(m20251001_000003_create_menu_entry_table::Migration),
            Box::new(m20251001_000004_create_menu_table::Migration),
            Box::new(m20251001_000005_create_dish_table::Migration),
        ]
    }
}
