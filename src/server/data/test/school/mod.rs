use crate::server::{
    data::school::SchoolRepository,
    model::{canteen::Canteen, location::GeographicalLocation, school::School},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
