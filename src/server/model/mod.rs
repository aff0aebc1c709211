//! Server-side domain models.
//!
//! Domain models carry the validation rules of each resource. They are built either
//! through their validating constructors (from request bodies) or from entity models
//! at the repository boundary, and are transformed to DTOs at the controller boundary.

pub mod canteen;
pub mod dish;
pub mod location;
pub mod menu;
pub mod school;
