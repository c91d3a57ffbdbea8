use thiserror::Error;

use crate::domain::types::{CategoryId, ProductId, UserId};

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The datasets reference records that do not exist.
    #[error("catalog integrity violated: {0}")]
    Integrity(String),
    /// The datasets could not be read.
    #[error("catalog unavailable: {0}")]
    Repository(String),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Unresolvable reference found while joining the datasets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogIntegrityError {
    #[error("product {product_id} references unknown category {category_id}")]
    UnknownCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },
    #[error("category {category_id} references unknown owner {owner_id}")]
    UnknownOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },
}
