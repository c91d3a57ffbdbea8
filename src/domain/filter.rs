//! Filter and sort state of the catalog page.
//!
//! The state is a plain value: the presentation layer owns it, applies one
//! transition per user interaction and hands it to the pure pipeline in
//! [`crate::services`].

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::types::TypeConstraintError;

/// Table column a user may sort by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Product,
    Category,
    User,
}

impl SortField {
    /// Every sortable column in table order.
    pub const ALL: [SortField; 4] = [Self::Id, Self::Product, Self::Category, Self::User];

    /// Value used in query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Product => "product",
            Self::Category => "category",
            Self::User => "user",
        }
    }

    /// Column header label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Product => "Product",
            Self::Category => "Category",
            Self::User => "User",
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "product" => Ok(Self::Product),
            "category" => Ok(Self::Category),
            "user" => Ok(Self::User),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "sort field: {other}"
            ))),
        }
    }
}

/// Direction indicator shown next to a column header.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Unsorted,
    Ascending,
    Descending,
}

/// Active filters plus the current sort column and direction.
///
/// Empty filters impose no constraint: `None`, `Some("")` and an empty
/// category set all mean "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Exact owner name to keep.
    pub owner: Option<String>,
    /// Case-insensitive substring of the product name.
    pub query: Option<String>,
    /// Category titles to keep.
    pub categories: BTreeSet<String>,
    pub sort_field: Option<SortField>,
    pub reversed: bool,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() { None } else { Some(value) }
}

impl FilterState {
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = non_empty(owner);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = non_empty(query);
        self
    }

    pub fn category(mut self, title: impl Into<String>) -> Self {
        self.categories.insert(title.into());
        self
    }

    pub fn sorted(mut self, field: SortField, reversed: bool) -> Self {
        self.sort_field = Some(field);
        self.reversed = reversed;
        self
    }

    /// Owner filter, if one is active.
    pub fn owner_filter(&self) -> Option<&str> {
        self.owner.as_deref().filter(|owner| !owner.is_empty())
    }

    /// Name search, if one is active.
    pub fn query_filter(&self) -> Option<&str> {
        self.query.as_deref().filter(|query| !query.is_empty())
    }

    /// Returns `true` when no owner, name or category filter is active.
    pub fn is_unfiltered(&self) -> bool {
        self.owner_filter().is_none()
            && self.query_filter().is_none()
            && self.categories.is_empty()
    }

    pub fn select_owner(&mut self, name: impl Into<String>) {
        self.owner = non_empty(name);
    }

    pub fn select_all_owners(&mut self) {
        self.owner = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = non_empty(query);
    }

    pub fn clear_query(&mut self) {
        self.query = None;
    }

    /// Adds the title to the category filter, or removes it when present.
    pub fn toggle_category(&mut self, title: &str) {
        if !self.categories.remove(title) {
            self.categories.insert(title.to_string());
        }
    }

    pub fn select_all_categories(&mut self) {
        self.categories.clear();
    }

    /// Clears every filter. Sort column and direction are kept.
    pub fn reset_all(&mut self) {
        self.owner = None;
        self.query = None;
        self.categories.clear();
    }

    /// Advances the sort state after a click on a column header.
    ///
    /// A new column starts ascending, a second click on the same column
    /// reverses it and a third click removes sorting altogether.
    pub fn click_sort(&mut self, field: SortField) {
        match self.sort_field {
            Some(current) if current == field && !self.reversed => {
                self.reversed = true;
            }
            Some(current) if current == field => {
                self.sort_field = None;
                self.reversed = false;
            }
            _ => {
                self.sort_field = Some(field);
                self.reversed = false;
            }
        }
    }

    /// Direction indicator for the header of `field`.
    pub fn sort_direction(&self, field: SortField) -> SortDirection {
        match self.sort_field {
            Some(current) if current == field && self.reversed => SortDirection::Descending,
            Some(current) if current == field => SortDirection::Ascending,
            _ => SortDirection::Unsorted,
        }
    }
}
