use crate::server::{
    data::canteen::CanteenRepository,
    model::{canteen::Canteen, location::GeographicalLocation},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_in_school;
