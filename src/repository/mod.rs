use thiserror::Error;

use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::domain::user::User;

pub mod static_catalog;

pub use static_catalog::StaticCatalogRepository;

/// Errors raised while loading or reading the catalog datasets.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A dataset file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A dataset is not valid JSON or violates a field constraint.
    #[error("failed to parse {dataset}: {message}")]
    Parse {
        dataset: &'static str,
        message: String,
    },
    /// Two records of the same dataset share an identifier.
    #[error("duplicate {dataset} id {id}")]
    DuplicateId { dataset: &'static str, id: i32 },
}

/// Convenient alias for repository results.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read-only operations for user entities.
pub trait UserReader {
    /// List all users in dataset order.
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories in dataset order.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List all products in dataset order.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}
