use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (or `with_school_tables()` for the whole
/// schema), then call `build()` to get a ready in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{School, Canteen};
///
/// let test = TestBuilder::new()
///     .with_table(School)
///     .with_table(Canteen)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax. Tables
    /// with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index that entity definitions cannot express, such as a composite
    /// unique key.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds every table of the application in dependency order:
    /// School, Canteen, MenuEntry, Menu, Dish.
    ///
    /// Also adds the composite unique indexes created by the migrations: one menu entry
    /// per canteen and day, and one menu of each type per entry.
    pub fn with_school_tables(self) -> Self {
        self.with_table(School)
            .with_table(Canteen)
            .with_table(MenuEntry)
            .with_table(Menu)
            .with_table(Dish)
            .with_index(
                Index::create()
                    .name("idx_menu_entry_canteen_id_date")
                    .table(MenuEntry)
                    .col(entity::menu_entry::Column::CanteenId)
                    .col(entity::menu_entry::Column::Date)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_menu_menu_entry_id_menu_type")
                    .table(Menu)
                    .col(entity::menu::Column::MenuEntryId)
                    .col(entity::menu::Column::MenuType)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds the test context, connecting to a fresh in-memory database and creating
    /// the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
