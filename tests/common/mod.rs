//! Helpers for integration tests.
#![allow(dead_code)]

use std::fs;

use pushkind_catalog::repository::StaticCatalogRepository;
use pushkind_catalog::services::catalog::{Catalog, load_catalog};
use tempfile::TempDir;

/// Catalog built from the embedded datasets.
pub fn sample_catalog() -> Catalog {
    let repo = StaticCatalogRepository::embedded().expect("embedded datasets should load");
    load_catalog(&repo).expect("embedded datasets should join")
}

/// Temporary directory holding the three dataset files.
pub struct TestDatasets {
    dir: TempDir,
}

impl TestDatasets {
    pub fn new(users: &str, categories: &str, products: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("users.json"), users).expect("Failed to write users");
        fs::write(dir.path().join("categories.json"), categories)
            .expect("Failed to write categories");
        fs::write(dir.path().join("products.json"), products).expect("Failed to write products");
        TestDatasets { dir }
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}
