use super::ProductRecord;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// A category choice offered by the product forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryOption {
    /// The tag stored on the product
    pub value: &'static str,
    /// The human-readable label
    pub label: &'static str,
}

/// The categories the create and edit forms offer.
///
/// The remote service does not validate categories; this list only drives the
/// form dropdown.
pub const CATEGORY_OPTIONS: [CategoryOption; 4] = [
    CategoryOption {
        value: "men's clothing",
        label: "Men's Clothing",
    },
    CategoryOption {
        value: "women's clothing",
        label: "Women's Clothing",
    },
    CategoryOption {
        value: "electronics",
        label: "Electronics",
    },
    CategoryOption {
        value: "jewelery",
        label: "Jewelery",
    },
];

/// Collect the distinct categories of `products`, in order of first appearance.
pub fn categories<'a>(products: impl IntoIterator<Item = &'a ProductRecord>) -> Vec<String> {
    products
        .into_iter()
        .map(|product| product.data.category.as_str())
        .collect::<IndexSet<&str, FxBuildHasher>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Label a category tag for display by upper-casing its first character.
pub fn category_label(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
