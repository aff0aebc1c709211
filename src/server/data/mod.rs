//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! resource. Repositories use SeaORM entity models internally and return domain models
//! to keep the data layer separate from the business logic layer. All database queries,
//! inserts and deletes are performed through these repositories.

pub mod canteen;
pub mod dish;
pub mod menu;
pub mod school;
