use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000003_create_menu_entry_table::MenuEntry;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menu::Table)
                    .if_not_exists()
                    .col(pk_auto(Menu::Id))
                    .col(integer(Menu::MenuEntryId))
                    .col(integer(Menu::MenuType))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_menu_entry_id")
                            .from(Menu::Table, Menu::MenuEntryId)
                            .to(MenuEntry::Table, MenuEntry::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One menu of each type per day entry
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_menu_entry_id_menu_type")
                    .table(Menu::Table)
                    .col(Menu::MenuEntryId)
                    .col(Menu::MenuType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Menu {
    Table,
    Id,
    MenuEntryId,
    MenuType,
}
