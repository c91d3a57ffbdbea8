use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::domain::user::User;
use crate::repository::{
    CategoryReader, ProductReader, RepositoryError, RepositoryResult, UserReader,
};

const USERS_FILE: &str = "users.json";
const CATEGORIES_FILE: &str = "categories.json";
const PRODUCTS_FILE: &str = "products.json";

const EMBEDDED_USERS: &str = include_str!("../../data/users.json");
const EMBEDDED_CATEGORIES: &str = include_str!("../../data/categories.json");
const EMBEDDED_PRODUCTS: &str = include_str!("../../data/products.json");

/// Repository serving the three fixed catalog datasets from memory.
///
/// Records keep the order in which they were supplied. Identifiers are
/// checked for uniqueness on construction; cross-dataset references are
/// resolved later by [`crate::services::views::build_views`].
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogRepository {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

fn ensure_unique<T>(
    items: &[T],
    dataset: &'static str,
    id_of: impl Fn(&T) -> i32,
) -> RepositoryResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        let id = id_of(item);
        if !seen.insert(id) {
            return Err(RepositoryError::DuplicateId { dataset, id });
        }
    }
    Ok(())
}

fn parse_dataset<T: DeserializeOwned>(
    dataset: &'static str,
    json: &str,
) -> RepositoryResult<Vec<T>> {
    serde_json::from_str(json).map_err(|e| RepositoryError::Parse {
        dataset,
        message: e.to_string(),
    })
}

fn read_dataset(dir: &Path, file: &str) -> RepositoryResult<String> {
    let path = dir.join(file);
    std::fs::read_to_string(&path).map_err(|source| RepositoryError::Io {
        path: path.display().to_string(),
        source,
    })
}

impl StaticCatalogRepository {
    /// Create a repository from already-parsed datasets.
    pub fn new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> RepositoryResult<Self> {
        ensure_unique(&users, "user", |u| u.id.get())?;
        ensure_unique(&categories, "category", |c| c.id.get())?;
        ensure_unique(&products, "product", |p| p.id.get())?;
        Ok(Self {
            users,
            categories,
            products,
        })
    }

    /// Parse the datasets from their JSON representation.
    pub fn from_json(users: &str, categories: &str, products: &str) -> RepositoryResult<Self> {
        Self::new(
            parse_dataset("users", users)?,
            parse_dataset("categories", categories)?,
            parse_dataset("products", products)?,
        )
    }

    /// Load `users.json`, `categories.json` and `products.json` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> RepositoryResult<Self> {
        let dir = dir.as_ref();
        log::info!("Loading catalog datasets from {}", dir.display());
        Self::from_json(
            &read_dataset(dir, USERS_FILE)?,
            &read_dataset(dir, CATEGORIES_FILE)?,
            &read_dataset(dir, PRODUCTS_FILE)?,
        )
    }

    /// The datasets compiled into the binary.
    pub fn embedded() -> RepositoryResult<Self> {
        Self::from_json(EMBEDDED_USERS, EMBEDDED_CATEGORIES, EMBEDDED_PRODUCTS)
    }
}

impl UserReader for StaticCatalogRepository {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.users.clone())
    }
}

impl CategoryReader for StaticCatalogRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.categories.clone())
    }
}

impl ProductReader for StaticCatalogRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.products.clone())
    }
}
