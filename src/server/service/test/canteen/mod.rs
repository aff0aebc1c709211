use crate::server::{
    error::AppError, model::canteen::Canteen, service::canteen::CanteenService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get;
mod get_all;
