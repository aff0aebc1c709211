//! JSON view models exchanged over the HTTP API.
//!
//! These DTOs are the wire shapes of each resource. Domain models convert into them
//! at the controller boundary and create-DTOs convert into domain models through the
//! validating constructors.

pub mod api;
pub mod canteen;
pub mod dish;
pub mod menu;
pub mod school;
