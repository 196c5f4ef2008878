mod delete;
mod list;
mod query;

pub use delete::DeleteWorkflow;
pub use list::ProductList;
pub use query::{ListQuery, SortKey};

use crate::models::ProductRecord;
use icu_collator::{Collator, CollatorBorrowed, options::CollatorOptions};
use std::{cmp::Ordering, sync::LazyLock};

// Root collation at the default (tertiary) strength: letters compare by base
// character first, then accents, then case with lower case first.
static TITLE_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> =
    LazyLock::new(|| Collator::try_new(Default::default(), CollatorOptions::default()).ok());

/// Derive the visible products from `products` and the view parameters.
///
/// The steps always run in the same order and from scratch:
///
/// 1. keep only the selected category (skipped when `query.category` is `None`),
/// 2. keep only products whose title or description contains `query.search`,
///    ignoring case (skipped when the search is empty),
/// 3. sort stably by `query.sort`.
pub fn filter_and_sort(products: &[ProductRecord], query: &ListQuery) -> Vec<ProductRecord> {
    let needle = query.search.to_lowercase();

    let mut result = products
        .iter()
        .filter(|product| match &query.category {
            Some(category) => &product.data.category == category,
            None => true,
        })
        .filter(|product| {
            needle.is_empty()
                || product.data.title.to_lowercase().contains(&needle)
                || product.data.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect::<Vec<_>>();

    sort_products(&mut result, query.sort);
    result
}

/// Stably sort `products` by `key`.
pub fn sort_products(products: &mut [ProductRecord], key: SortKey) {
    match key {
        SortKey::PriceAsc => products.sort_by(|a, b| a.data.price.total_cmp(&b.data.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.data.price.total_cmp(&a.data.price)),
        SortKey::TitleAsc => products.sort_by(|a, b| compare_titles(&a.data.title, &b.data.title)),
        SortKey::TitleDesc => products.sort_by(|a, b| compare_titles(&b.data.title, &a.data.title)),
        SortKey::Rating => {
            products.sort_by(|a, b| b.data.rating.rate.total_cmp(&a.data.rating.rate))
        }
        SortKey::Default => products.sort_by_key(|product| product.id),
    }
}

/// Compare titles the way a reader expects: letters first, accents and case
/// second.
///
/// Titles equal up to case are ordered lower case first.
fn compare_titles(a: &str, b: &str) -> Ordering {
    match TITLE_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        // the collation data is compiled in, so this only guards the fallible constructor
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
            .then_with(|| b.cmp(a)),
    }
}
