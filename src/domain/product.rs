use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryIcon, CategoryId, CategoryTitle, ProductId, ProductName, UserName, UserSex,
};

/// A product as supplied by the static datasets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    /// Canonical category referenced by the product.
    pub category_id: CategoryId,
}

/// Denormalized row combining a [`Product`] with its category and the
/// category owner's display fields.
///
/// Rows are built once from the datasets and then only filtered and
/// reordered, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: ProductId,
    pub name: ProductName,
    pub category_name: CategoryTitle,
    pub icon: CategoryIcon,
    pub user_name: UserName,
    pub user_sex: UserSex,
}
