//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They resolve the
//! school → canteen → menu → dish ownership chain, apply the domain rules held by the
//! aggregates in `server::model`, and translate missing resources into
//! `AppError::NotFound`.

pub mod auth;
pub mod canteen;
pub mod dish;
pub mod menu;
pub mod school;

#[cfg(test)]
mod test;
