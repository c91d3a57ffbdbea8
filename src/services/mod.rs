//! Catalog pipeline: view-row construction, filtering and ordering.
//!
//! Every stage is a pure function over already-validated rows. Only
//! [`catalog::load_catalog`] touches a repository and can fail.

pub mod catalog;
pub mod errors;
pub mod filters;
pub mod sorting;
pub mod views;

pub use errors::{CatalogIntegrityError, ServiceError, ServiceResult};
