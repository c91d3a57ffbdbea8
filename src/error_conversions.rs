//! Error conversion glue between layers.
//!
//! The domain and repository layers must not depend on service error types,
//! so the conversions live here instead of next to either enum.

use crate::repository::RepositoryError;
use crate::services::{CatalogIntegrityError, ServiceError};

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        ServiceError::Repository(val.to_string())
    }
}

impl From<CatalogIntegrityError> for ServiceError {
    fn from(val: CatalogIntegrityError) -> Self {
        ServiceError::Integrity(val.to_string())
    }
}
