//! Ementa Test Utils
//!
//! Provides shared testing utilities for building repository, service and HTTP tests for
//! the ementa application. This crate offers a builder pattern for creating test contexts
//! with in-memory SQLite databases, plus fixtures and factories for test data.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models, never inserted
//! - **factory**: Inserted rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_canteens() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_school_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (school, canteen) = factory::helpers::create_canteen_with_dependencies(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
