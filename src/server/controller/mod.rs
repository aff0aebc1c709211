//! HTTP request handlers.
//!
//! Controllers resolve path identifiers, turn request bodies into validated domain
//! models, call the matching service and convert the result to a DTO. Every failure
//! is returned as an `AppError`, whose `IntoResponse` impl picks the status code.

pub mod canteen;
pub mod dish;
pub mod menu;
pub mod school;
