use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000001_create_school_table::School;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Canteen::Table)
                    .if_not_exists()
                    .col(pk_auto(Canteen::Id))
                    .col(integer(Canteen::SchoolId))
                    .col(string(Canteen::Name))
                    .col(double_null(Canteen::Latitude))
                    .col(double_null(Canteen::Longitude))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_canteen_school_id")
                            .from(Canteen::Table, Canteen::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Canteen::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Canteen {
    Table,
    Id,
    SchoolId,
    Name,
    Latitude,
    Longitude,
}
