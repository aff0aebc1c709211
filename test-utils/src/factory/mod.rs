//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each
//! table has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation. Parents must exist before their children are created.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let school = factory::create_school(&db).await?;
//! let canteen = factory::create_canteen(&db, school.id).await?;
//!
//! // Whole chain down to a dish
//! let (school, canteen, entry, menu, dish) =
//!     factory::helpers::create_menu_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let school = factory::school::SchoolFactory::new(&db)
//!     .acronym("FEUP")
//!     .name("Faculdade de Engenharia")
//!     .build()
//!     .await?;
//! ```

pub mod canteen;
pub mod dish;
pub mod helpers;
pub mod menu;
pub mod menu_entry;
pub mod school;

pub use canteen::create_canteen;
pub use dish::create_dish;
pub use menu::create_menu;
pub use menu_entry::create_menu_entry;
pub use school::create_school;
