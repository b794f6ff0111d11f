//! Domain layer for the project catalog.
//!
//! Holds the project model, the fixed category set, input validation and
//! the [`store::ProjectStore`] abstraction with its in-memory implementation.
//! Nothing here knows about HTTP.

pub mod category;
pub mod error;
pub mod project;
pub mod store;
pub mod types;
pub mod validation;
