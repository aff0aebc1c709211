//! School canteen menu API.
//!
//! `model` holds the request and response DTOs shared by every endpoint; `server`
//! holds the HTTP backend.

pub mod model;
pub mod server;
