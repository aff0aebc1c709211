use crate::server::{
    data::menu::MenuRepository,
    model::{
        canteen::today,
        dish::{Dish, DishType},
        menu::{Menu, MenuType},
    },
};
use chrono::{Duration, NaiveDate};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_in_canteen;

fn lunch() -> Menu {
    Menu::new(
        0,
        vec![
            Dish::new(0, "Francesinha").unwrap(),
            Dish::new(2, "Grilled Tofu").unwrap(),
        ],
    )
    .unwrap()
}

fn dinner() -> Menu {
    Menu::new(1, vec![Dish::new(1, "Grilled Salmon").unwrap()]).unwrap()
}
