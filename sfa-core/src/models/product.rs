use std::{fmt, num::ParseIntError, str::FromStr};
use thiserror::Error;

/// The identifier the remote product service assigns to a product.
///
/// Ids are immutable once assigned and are never editable through the panel.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The error returned when a string is not a valid product id.
#[derive(Debug, Error)]
#[error("invalid product id: {0}")]
pub struct ParseProductIdError(#[from] ParseIntError);

impl FromStr for ProductId {
    type Err = ParseProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A product's aggregate review score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Rating {
    /// Average score, intended (but not validated) to lie within 0–5
    pub rate: f64,
    /// Number of reviews contributing to `rate`
    pub count: u32,
}

/// Everything about a product except its id.
///
/// This is the payload sent on create. The remote service tends to echo
/// partial records back, so every field falls back to its default when
/// absent.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ProductData {
    /// Display name
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Free-form description
    pub description: String,
    /// Category tag, e.g. "electronics"
    pub category: String,
    /// Image URL; empty when the product has no image
    pub image: String,
    /// Review score
    pub rating: Rating,
}

impl ProductData {
    /// The image URL, or `None` if the product has none.
    pub fn image_url(&self) -> Option<&str> {
        let image = self.image.trim();
        if image.is_empty() { None } else { Some(image) }
    }
}

/// A product record combines the service-assigned id with the product data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductRecord {
    /// Unique identifier for the product
    pub id: ProductId,
    /// The remaining fields, flattened alongside `id` on the wire
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub data: ProductData,
}

impl ProductRecord {
    /// Pair an id with its data.
    pub fn new(id: impl Into<ProductId>, data: ProductData) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}
