use crate::server::{data::dish::DishRepository, model::dish::DishType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
