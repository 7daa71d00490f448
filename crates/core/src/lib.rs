//! Domain types for the portfolio site.
//!
//! Holds the value objects rendered on the home page (projects, skills,
//! services), the embedded catalog literals, and the invariant checks the
//! server runs once at startup. No I/O and no async here.

pub mod catalog;
pub mod error;

pub use catalog::{Catalog, Project, Service, Skills};
pub use error::CoreError;
