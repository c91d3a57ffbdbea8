use crate::domain::filter::FilterState;
use crate::domain::product::ProductView;

/// Keeps the rows accepted by every active filter, preserving their order.
///
/// Filters run as owner, then name search, then category; inactive filters
/// pass every row through.
pub fn apply_filters(views: &[ProductView], state: &FilterState) -> Vec<ProductView> {
    let mut items = views.to_vec();

    if let Some(owner) = state.owner_filter() {
        items.retain(|v| v.user_name.as_str() == owner);
    }

    if let Some(query) = state.query_filter() {
        let query = query.to_lowercase();
        items.retain(|v| v.name.to_lowercase().contains(&query));
    }

    if !state.categories.is_empty() {
        items.retain(|v| state.categories.contains(v.category_name.as_str()));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        CategoryIcon, CategoryTitle, ProductId, ProductName, UserName, UserSex,
    };

    fn view(id: i32, name: &str, category: &str, user: &str) -> ProductView {
        ProductView {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(name).unwrap(),
            category_name: CategoryTitle::new(category).unwrap(),
            icon: CategoryIcon::new("*").unwrap(),
            user_name: UserName::new(user).unwrap(),
            user_sex: UserSex::Male,
        }
    }

    fn sample_views() -> Vec<ProductView> {
        vec![
            view(1, "Milk", "Drinks", "Roma"),
            view(2, "Bread", "Grocery", "Anna"),
            view(3, "Jacket", "Clothes", "Max"),
            view(4, "iPhone", "Electronics", "Roma"),
            view(5, "Coat", "Clothes", "Maxim"),
        ]
    }

    fn ids(views: &[ProductView]) -> Vec<i32> {
        views.iter().map(|v| v.id.get()).collect()
    }

    #[test]
    fn empty_state_is_identity() {
        let views = sample_views();

        assert_eq!(apply_filters(&views, &FilterState::default()), views);
    }

    #[test]
    fn owner_filter_matches_exactly() {
        let state = FilterState::default().owner("Max");

        assert_eq!(ids(&apply_filters(&sample_views(), &state)), vec![3]);
    }

    #[test]
    fn owner_filter_is_case_sensitive() {
        let state = FilterState::default().owner("roma");

        assert!(apply_filters(&sample_views(), &state).is_empty());
    }

    #[test]
    fn name_search_ignores_case() {
        let state = FilterState::default().query("PH");

        assert_eq!(ids(&apply_filters(&sample_views(), &state)), vec![4]);
    }

    #[test]
    fn category_filter_keeps_members() {
        let state = FilterState::default().category("Clothes").category("Drinks");

        assert_eq!(ids(&apply_filters(&sample_views(), &state)), vec![1, 3, 5]);
    }

    #[test]
    fn filters_combine_with_and() {
        let state = FilterState::default()
            .owner("Roma")
            .query("i")
            .category("Drinks")
            .category("Electronics");

        assert_eq!(ids(&apply_filters(&sample_views(), &state)), vec![1, 4]);

        let state = state.query("milk");
        assert_eq!(ids(&apply_filters(&sample_views(), &state)), vec![1]);
    }

    #[test]
    fn filter_order_does_not_change_result() {
        let views = sample_views();
        let owner = FilterState::default().owner("Roma");
        let query = FilterState::default().query("i");
        let category = FilterState::default().category("Electronics");

        let forward = apply_filters(
            &apply_filters(&apply_filters(&views, &owner), &query),
            &category,
        );
        let backward = apply_filters(
            &apply_filters(&apply_filters(&views, &category), &query),
            &owner,
        );

        assert_eq!(forward, backward);
        assert_eq!(ids(&forward), vec![4]);
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let state = FilterState::default().category("Toys");

        assert!(apply_filters(&sample_views(), &state).is_empty());
    }
}
