//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply the default
//! values used by the factories. Unlike factories, fixtures never touch the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let school = fixture::school::entity();
//!
//! let canteen = fixture::canteen::entity_builder()
//!     .name("Bar do F")
//!     .location(41.17, -8.60)
//!     .build();
//! ```

pub mod canteen;
pub mod dish;
pub mod school;

pub use canteen::{entity as canteen_entity, entity_builder as canteen_entity_builder};
pub use dish::{entity as dish_entity, entity_builder as dish_entity_builder};
pub use school::{entity as school_entity, entity_builder as school_entity_builder};
