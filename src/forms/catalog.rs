//! Query-string form carrying the catalog [`FilterState`].
//!
//! Parameters: `user`, `query`, repeated `category`, `sort`
//! (`id|product|category|user`) and `reversed` (`true|false`). Parsing and
//! [`catalog_href`] are inverses, so every link on the page can encode the
//! state it leads to.

use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::filter::{FilterState, SortField};
use crate::domain::types::TypeConstraintError;

/// Raw catalog query parameters as received from the client.
#[derive(Debug, Default, Clone, PartialEq, Eq, Validate)]
pub struct CatalogQueryForm {
    #[validate(length(max = 128))]
    pub user: Option<String>,
    #[validate(length(max = 256))]
    pub query: Option<String>,
    #[validate(length(max = 64))]
    pub categories: Vec<String>,
    #[validate(length(max = 16))]
    pub sort: Option<String>,
    #[validate(length(max = 8))]
    pub reversed: Option<String>,
}

impl FromIterator<(String, String)> for CatalogQueryForm {
    /// Collects decoded query pairs. Unknown keys are ignored and the last
    /// value wins for every key except the repeatable `category`.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "user" => form.user = Some(value),
                "query" => form.query = Some(value),
                "category" => form.categories.push(value),
                "sort" => form.sort = Some(value),
                "reversed" => form.reversed = Some(value),
                other => log::debug!("Ignoring unknown catalog query parameter '{other}'"),
            }
        }
        form
    }
}

#[derive(Debug, Error)]
pub enum CatalogQueryFormError {
    #[error("Catalog query validation failed: {0}")]
    Validation(String),
    #[error("Catalog query contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CatalogQueryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CatalogQueryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn parse_reversed(value: &str) -> Result<bool, TypeConstraintError> {
    match value.trim() {
        "" | "false" | "0" => Ok(false),
        "true" | "1" => Ok(true),
        other => Err(TypeConstraintError::InvalidValue(format!(
            "reversed: {other}"
        ))),
    }
}

impl TryFrom<CatalogQueryForm> for FilterState {
    type Error = CatalogQueryFormError;

    fn try_from(value: CatalogQueryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let sort_field = match value.sort.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(sort) => Some(sort.parse::<SortField>()?),
        };
        let reversed = match value.reversed.as_deref() {
            Some(reversed) => parse_reversed(reversed)?,
            None => false,
        };

        let mut state = FilterState::default()
            .owner(value.user.unwrap_or_default())
            .query(value.query.unwrap_or_default());
        for title in value.categories {
            if !title.is_empty() {
                state = state.category(title);
            }
        }
        state.sort_field = sort_field;
        state.reversed = reversed;

        Ok(state)
    }
}

/// Query pairs describing `state`; inactive parts are omitted.
pub fn query_pairs(state: &FilterState) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(owner) = state.owner_filter() {
        pairs.push(("user", owner.to_string()));
    }
    if let Some(query) = state.query_filter() {
        pairs.push(("query", query.to_string()));
    }
    for title in &state.categories {
        pairs.push(("category", title.clone()));
    }
    if let Some(field) = state.sort_field {
        pairs.push(("sort", field.as_str().to_string()));
    }
    if state.reversed {
        pairs.push(("reversed", "true".to_string()));
    }
    pairs
}

/// Link to the catalog page showing `state`.
pub fn catalog_href(state: &FilterState) -> String {
    let pairs = query_pairs(state);
    if pairs.is_empty() {
        return "/".to_string();
    }

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("/?{query}")
}
