//! Request processing that runs before the handlers.

pub mod auth;
