use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

use crate::domain::filter::SortField;
use crate::domain::product::ProductView;

/// Which row field the non-ID columns sort on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKeyMode {
    /// Product, Category and User columns all order by product name.
    #[default]
    ProductName,
    /// Category orders by category name and User by owner name.
    Column,
}

impl SortKeyMode {
    pub fn from_flag(sort_by_column: bool) -> Self {
        if sort_by_column {
            Self::Column
        } else {
            Self::ProductName
        }
    }
}

thread_local! {
    // Root collation order, shared by every sort on this thread.
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .inspect_err(|e| log::error!("Failed to load collation data: {e:?}"))
            .ok();
}

/// Compares display strings with Unicode collation.
///
/// Base letters decide first, so accented and non-ASCII names sort next to
/// their unaccented neighbours; strings differing only in case put the
/// lower-case form first.
pub fn compare_locale(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

fn compare_rows(
    a: &ProductView,
    b: &ProductView,
    field: SortField,
    mode: SortKeyMode,
) -> Ordering {
    match (field, mode) {
        (SortField::Id, _) => a.id.cmp(&b.id),
        (SortField::Category, SortKeyMode::Column) => {
            compare_locale(&a.category_name, &b.category_name)
        }
        (SortField::User, SortKeyMode::Column) => compare_locale(&a.user_name, &b.user_name),
        _ => compare_locale(&a.name, &b.name),
    }
}

/// Orders rows by `field` and optionally reverses the result.
///
/// Product, Category and User all sort by product name. See
/// [`apply_sort_with`] for per-column keys.
pub fn apply_sort(
    views: Vec<ProductView>,
    field: Option<SortField>,
    reversed: bool,
) -> Vec<ProductView> {
    apply_sort_with(views, field, reversed, SortKeyMode::ProductName)
}

/// Stable ascending sort by `field` (no-op for `None`), followed by a
/// literal end-to-end reversal when `reversed` is set.
///
/// Reversal is not a descending sort: rows with equal keys come out in the
/// opposite of their filtered order.
pub fn apply_sort_with(
    mut views: Vec<ProductView>,
    field: Option<SortField>,
    reversed: bool,
    mode: SortKeyMode,
) -> Vec<ProductView> {
    if let Some(field) = field {
        views.sort_by(|a, b| compare_rows(a, b, field, mode));
    }

    if reversed {
        views.reverse();
    }

    views
}
