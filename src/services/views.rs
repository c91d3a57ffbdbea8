use std::collections::HashMap;

use crate::domain::category::Category;
use crate::domain::product::{Product, ProductView};
use crate::domain::types::{CategoryId, UserId};
use crate::domain::user::User;

use super::CatalogIntegrityError;

/// Joins every product with its category and the category owner.
///
/// Rows come out in product order. The first dangling reference aborts the
/// whole build; partial results are never returned. When identifiers repeat,
/// the first record wins.
pub fn build_views(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> Result<Vec<ProductView>, CatalogIntegrityError> {
    let mut categories_by_id: HashMap<CategoryId, &Category> = HashMap::new();
    for category in categories {
        categories_by_id.entry(category.id).or_insert(category);
    }

    let mut users_by_id: HashMap<UserId, &User> = HashMap::new();
    for user in users {
        users_by_id.entry(user.id).or_insert(user);
    }

    products
        .iter()
        .map(|product| -> Result<ProductView, CatalogIntegrityError> {
            let category = categories_by_id.get(&product.category_id).ok_or(
                CatalogIntegrityError::UnknownCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                },
            )?;
            let owner =
                users_by_id
                    .get(&category.owner_id)
                    .ok_or(CatalogIntegrityError::UnknownOwner {
                        category_id: category.id,
                        owner_id: category.owner_id,
                    })?;

            Ok(ProductView {
                id: product.id,
                name: product.name.clone(),
                category_name: category.title.clone(),
                icon: category.icon.clone(),
                user_name: owner.name.clone(),
                user_sex: owner.sex,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        CategoryIcon, CategoryTitle, ProductId, ProductName, UserName, UserSex,
    };

    fn user(id: i32, name: &str, sex: UserSex) -> User {
        User {
            id: UserId::new(id).unwrap(),
            name: UserName::new(name).unwrap(),
            sex,
        }
    }

    fn category(id: i32, title: &str, icon: &str, owner_id: i32) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            title: CategoryTitle::new(title).unwrap(),
            icon: CategoryIcon::new(icon).unwrap(),
            owner_id: UserId::new(owner_id).unwrap(),
        }
    }

    fn product(id: i32, name: &str, category_id: i32) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(name).unwrap(),
            category_id: CategoryId::new(category_id).unwrap(),
        }
    }

    #[test]
    fn joins_category_and_owner_fields() {
        let users = vec![user(1, "Roma", UserSex::Male), user(2, "Anna", UserSex::Female)];
        let categories = vec![category(1, "Grocery", "🍞", 2), category(2, "Drinks", "🍺", 1)];
        let products = vec![product(1, "Milk", 2), product(2, "Bread", 1)];

        let views = build_views(&products, &categories, &users).unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].name, "Milk");
        assert_eq!(views[0].category_name, "Drinks");
        assert_eq!(views[0].icon, "🍺");
        assert_eq!(views[0].user_name, "Roma");
        assert_eq!(views[0].user_sex, UserSex::Male);
        assert_eq!(views[1].category_name, "Grocery");
        assert_eq!(views[1].user_name, "Anna");
        assert_eq!(views[1].user_sex, UserSex::Female);
    }

    #[test]
    fn keeps_product_order() {
        let users = vec![user(1, "Roma", UserSex::Male)];
        let categories = vec![category(1, "Fruits", "🍏", 1)];
        let products = vec![
            product(3, "Apple", 1),
            product(1, "Banana", 1),
            product(2, "Apple", 1),
        ];

        let ids: Vec<i32> = build_views(&products, &categories, &users)
            .unwrap()
            .iter()
            .map(|v| v.id.get())
            .collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn fails_on_unknown_category() {
        let users = vec![user(1, "Roma", UserSex::Male)];
        let categories = vec![category(1, "Fruits", "🍏", 1)];
        let products = vec![product(1, "Apple", 1), product(2, "Ghost", 9)];

        let err = build_views(&products, &categories, &users).unwrap_err();

        assert_eq!(
            err,
            CatalogIntegrityError::UnknownCategory {
                product_id: ProductId::new(2).unwrap(),
                category_id: CategoryId::new(9).unwrap(),
            }
        );
    }

    #[test]
    fn fails_on_unknown_owner() {
        let users = vec![user(1, "Roma", UserSex::Male)];
        let categories = vec![category(1, "Fruits", "🍏", 7)];
        let products = vec![product(1, "Apple", 1)];

        let err = build_views(&products, &categories, &users).unwrap_err();

        assert_eq!(
            err.to_string(),
            "category 1 references unknown owner 7"
        );
    }

    #[test]
    fn first_record_wins_for_repeated_ids() {
        let users = vec![user(1, "Roma", UserSex::Male), user(1, "Anna", UserSex::Female)];
        let categories = vec![category(1, "Fruits", "🍏", 1)];
        let products = vec![product(1, "Apple", 1)];

        let views = build_views(&products, &categories, &users).unwrap();

        assert_eq!(views[0].user_name, "Roma");
    }

    #[test]
    fn copies_padded_names_unchanged() {
        let users = vec![user(1, " Roma", UserSex::Male)];
        let categories = vec![category(1, "Fruits ", "🍏", 1)];
        let products = vec![product(1, "  Apple ", 1)];

        let views = build_views(&products, &categories, &users).unwrap();

        assert_eq!(views[0].name, products[0].name);
        assert_eq!(views[0].name, "  Apple ");
        assert_eq!(views[0].category_name, "Fruits ");
        assert_eq!(views[0].user_name, " Roma");
    }

    #[test]
    fn empty_products_build_no_rows() {
        assert!(build_views(&[], &[], &[]).unwrap().is_empty());
    }
}
