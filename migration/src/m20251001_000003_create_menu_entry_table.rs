use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000002_create_canteen_table::Canteen;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuEntry::Id))
                    .col(integer(MenuEntry::CanteenId))
                    .col(date(MenuEntry::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_entry_canteen_id")
                            .from(MenuEntry::Table, MenuEntry::CanteenId)
                            .to(Canteen::Table, Canteen::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One entry per canteen per calendar day
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_entry_canteen_id_date")
                    .table(MenuEntry::Table)
                    .col(MenuEntry::CanteenId)
                    .col(MenuEntry::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuEntry {
    Table,
    Id,
    CanteenId,
    Date,
}
