use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000004_create_menu_table::Menu;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dish::Table)
                    .if_not_exists()
                    .col(pk_auto(Dish::Id))
                    .col(integer(Dish::MenuId))
                    .col(integer(Dish::DishType))
                    .col(string(Dish::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dish_menu_id")
                            .from(Dish::Table, Dish::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dish::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dish {
    Table,
    Id,
    MenuId,
    DishType,
    Description,
}
