//! SeaORM entity models for the ementa database schema.
//!
//! One module per table. The `prelude` module re-exports every `Entity` under its
//! table name so callers can write `entity::prelude::School::find()`.

pub mod prelude;

pub mod canteen;
pub mod dish;
pub mod menu;
pub mod menu_entry;
pub mod school;
