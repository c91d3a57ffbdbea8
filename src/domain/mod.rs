//! Catalog entities and the value objects they are built from.

pub mod category;
pub mod filter;
pub mod product;
pub mod types;
pub mod user;
