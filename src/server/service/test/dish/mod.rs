use crate::server::{error::AppError, service::dish::DishService};
use test_utils::{builder::TestBuilder, factory};

mod get_all;
