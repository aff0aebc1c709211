use crate::server::{
    error::AppError,
    model::{
        dish::Dish,
        menu::{Menu, MenuType},
    },
    service::menu::MenuService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get;
mod get_available;

fn lunch() -> Menu {
    Menu::new(0, vec![Dish::new(0, "Francesinha").unwrap()]).unwrap()
}

fn dinner() -> Menu {
    Menu::new(1, vec![Dish::new(3, "Canja de Galinha").unwrap()]).unwrap()
}
