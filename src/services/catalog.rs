use crate::domain::category::Category;
use crate::domain::filter::FilterState;
use crate::domain::product::ProductView;
use crate::domain::user::User;
use crate::repository::{CategoryReader, ProductReader, UserReader};

use super::filters::apply_filters;
use super::sorting::{SortKeyMode, apply_sort_with};
use super::views::build_views;
use super::{ServiceError, ServiceResult};

/// The joined catalog, built once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Users in dataset order, used for the owner tabs.
    pub users: Vec<User>,
    /// Categories in dataset order, used for the category buttons.
    pub categories: Vec<Category>,
    /// Base rows every request is filtered from.
    pub views: Vec<ProductView>,
}

/// Everything the catalog page renders for one filter state.
#[derive(Debug, Clone)]
pub struct CatalogPage<'a> {
    pub users: &'a [User],
    pub categories: &'a [Category],
    pub products: Vec<ProductView>,
}

/// Reads the datasets and joins them into view rows.
///
/// Integrity violations are not recoverable; callers are expected to abort
/// on any error returned here.
pub fn load_catalog<R>(repo: &R) -> ServiceResult<Catalog>
where
    R: UserReader + CategoryReader + ProductReader,
{
    let users = repo.list_users().map_err(|e| {
        log::error!("Failed to list users: {e}");
        ServiceError::from(e)
    })?;
    let categories = repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::from(e)
    })?;
    let products = repo.list_products().map_err(|e| {
        log::error!("Failed to list products: {e}");
        ServiceError::from(e)
    })?;

    let views = build_views(&products, &categories, &users).map_err(|e| {
        log::error!("Failed to build product views: {e}");
        ServiceError::from(e)
    })?;

    log::info!(
        "Catalog loaded: {} users, {} categories, {} products",
        users.len(),
        categories.len(),
        views.len()
    );

    Ok(Catalog {
        users,
        categories,
        views,
    })
}

/// Runs the filter and sort stages over the catalog's base rows.
pub fn prepare_products(
    catalog: &Catalog,
    state: &FilterState,
    mode: SortKeyMode,
) -> Vec<ProductView> {
    let filtered = apply_filters(&catalog.views, state);
    let visible = apply_sort_with(filtered, state.sort_field, state.reversed, mode);
    log::debug!(
        "Prepared {} of {} products for {:?}",
        visible.len(),
        catalog.views.len(),
        state
    );
    visible
}

/// Core business logic for rendering the catalog page.
pub fn show_catalog<'a>(
    catalog: &'a Catalog,
    state: &FilterState,
    mode: SortKeyMode,
) -> CatalogPage<'a> {
    CatalogPage {
        users: &catalog.users,
        categories: &catalog.categories,
        products: prepare_products(catalog, state, mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::SortField;
    use crate::repository::StaticCatalogRepository;
    use crate::repository::test::TestRepository;

    fn sample_catalog() -> Catalog {
        load_catalog(&StaticCatalogRepository::embedded().unwrap()).unwrap()
    }

    fn names(products: &[ProductView]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn loads_embedded_catalog() {
        let catalog = sample_catalog();

        assert_eq!(catalog.users.len(), 4);
        assert_eq!(catalog.categories.len(), 5);
        assert_eq!(catalog.views.len(), 9);
        assert_eq!(catalog.views[0].name, "Milk");
        assert_eq!(catalog.views[0].category_name, "Drinks");
        assert_eq!(catalog.views[0].user_name, "Roma");
    }

    #[test]
    fn repository_failures_become_service_errors() {
        let err = load_catalog(&TestRepository::failing()).unwrap_err();

        assert!(matches!(err, ServiceError::Repository(_)));
    }

    #[test]
    fn dangling_references_become_integrity_errors() {
        let repo = TestRepository::new(
            vec![],
            vec![],
            serde_json::from_str(r#"[{"id": 1, "name": "Milk", "categoryId": 2}]"#).unwrap(),
        );

        let err = load_catalog(&repo).unwrap_err();

        assert_eq!(
            err,
            ServiceError::Integrity("product 1 references unknown category 2".to_string())
        );
    }

    #[test]
    fn loaded_names_reach_rows_unchanged() {
        let repo = StaticCatalogRepository::from_json(
            r#"[{"id": 1, "name": "Anna ", "sex": "f"}]"#,
            r#"[{"id": 1, "title": " Fruits", "icon": "🍏", "ownerId": 1}]"#,
            r#"[{"id": 1, "name": "  Apple ", "categoryId": 1}]"#,
        )
        .unwrap();

        let catalog = load_catalog(&repo).unwrap();
        assert_eq!(catalog.views[0].name, "  Apple ");
        assert_eq!(catalog.views[0].category_name, " Fruits");
        assert_eq!(catalog.views[0].user_name, "Anna ");

        let state = FilterState::default().owner("Anna ").category(" Fruits");
        let products = prepare_products(&catalog, &state, SortKeyMode::ProductName);
        assert_eq!(names(&products), vec!["  Apple "]);

        let trimmed = FilterState::default().owner("Anna");
        assert!(prepare_products(&catalog, &trimmed, SortKeyMode::ProductName).is_empty());
    }

    #[test]
    fn prepares_filtered_and_sorted_rows() {
        let catalog = sample_catalog();
        let state = FilterState::default()
            .owner("Anna")
            .sorted(SortField::Product, false);

        let products = prepare_products(&catalog, &state, SortKeyMode::ProductName);

        assert_eq!(names(&products), vec!["Apple", "Banana", "Bread", "Eggs", "Sugar"]);
    }

    #[test]
    fn page_lists_all_users_and_categories() {
        let catalog = sample_catalog();
        let state = FilterState::default().owner("John");

        let page = show_catalog(&catalog, &state, SortKeyMode::ProductName);

        assert_eq!(page.users.len(), 4);
        assert_eq!(page.categories.len(), 5);
        assert!(page.products.is_empty());
    }
}
