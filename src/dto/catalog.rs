//! Template-facing view of the catalog page.
//!
//! Every control carries the link to the state it produces, computed by
//! applying the matching [`FilterState`] transition to a copy of the current
//! state.

use serde::Serialize;

use crate::domain::filter::{FilterState, SortDirection, SortField};
use crate::domain::product::ProductView;
use crate::domain::types::UserSex;
use crate::forms::catalog::{catalog_href, query_pairs};
use crate::services::catalog::CatalogPage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkDto {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDto {
    pub label: &'static str,
    pub href: String,
    pub direction: SortDirection,
    /// Font Awesome icon class for the current direction.
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenFieldDto {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRowDto {
    pub id: i32,
    pub name: String,
    /// `"{icon} - {title}"`.
    pub category: String,
    pub user_name: String,
    /// CSS class colouring the owner by sex.
    pub user_class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPageDto {
    pub owner_tabs: Vec<LinkDto>,
    pub query: String,
    /// Inputs re-submitting the rest of the state with the search form.
    pub search_hidden_fields: Vec<HiddenFieldDto>,
    pub clear_query_href: Option<String>,
    pub category_buttons: Vec<LinkDto>,
    pub reset_href: String,
    pub columns: Vec<ColumnDto>,
    pub products: Vec<ProductRowDto>,
}

fn with(state: &FilterState, transition: impl FnOnce(&mut FilterState)) -> String {
    let mut next = state.clone();
    transition(&mut next);
    catalog_href(&next)
}

fn sort_icon(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Unsorted => "fa-sort",
        SortDirection::Ascending => "fa-sort-up",
        SortDirection::Descending => "fa-sort-down",
    }
}

impl From<&ProductView> for ProductRowDto {
    fn from(value: &ProductView) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.to_string(),
            category: format!("{} - {}", value.icon, value.category_name),
            user_name: value.user_name.to_string(),
            user_class: match value.user_sex {
                UserSex::Male => "has-text-link",
                UserSex::Female => "has-text-danger",
            },
        }
    }
}

impl CatalogPageDto {
    pub fn new(page: &CatalogPage<'_>, state: &FilterState) -> Self {
        let mut owner_tabs = vec![LinkDto {
            label: "All".to_string(),
            href: with(state, FilterState::select_all_owners),
            active: state.owner_filter().is_none(),
        }];
        owner_tabs.extend(page.users.iter().map(|user| LinkDto {
            label: user.name.to_string(),
            href: with(state, |s| s.select_owner(user.name.as_str())),
            active: state.owner_filter() == Some(user.name.as_str()),
        }));

        let mut category_buttons = vec![LinkDto {
            label: "All".to_string(),
            href: with(state, FilterState::select_all_categories),
            active: state.categories.is_empty(),
        }];
        category_buttons.extend(page.categories.iter().map(|category| LinkDto {
            label: category.title.to_string(),
            href: with(state, |s| s.toggle_category(category.title.as_str())),
            active: state.categories.contains(category.title.as_str()),
        }));

        let columns = SortField::ALL
            .iter()
            .map(|&field| {
                let direction = state.sort_direction(field);
                ColumnDto {
                    label: field.label(),
                    href: with(state, |s| s.click_sort(field)),
                    direction,
                    icon: sort_icon(direction),
                }
            })
            .collect();

        let search_hidden_fields = query_pairs(state)
            .into_iter()
            .filter(|(name, _)| *name != "query")
            .map(|(name, value)| HiddenFieldDto { name, value })
            .collect();

        Self {
            owner_tabs,
            query: state.query_filter().unwrap_or_default().to_string(),
            search_hidden_fields,
            clear_query_href: state
                .query_filter()
                .map(|_| with(state, FilterState::clear_query)),
            category_buttons,
            reset_href: with(state, FilterState::reset_all),
            columns,
            products: page.products.iter().map(ProductRowDto::from).collect(),
        }
    }
}
