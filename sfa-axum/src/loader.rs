//! The one read each page makes before it renders.
//!
//! Failures never escape a loader: they become a [`Loaded`] state that the
//! page renders in place of its content, and are logged here.

use sfa_core::{
    models::{Loaded, ProductId, ProductRecord},
    ports::ProductRepository,
};
use tracing::{Level, event};

/// Fetch every product for the list page.
pub(crate) async fn load_products<T: ProductRepository>(catalog: &T) -> Loaded<Vec<ProductRecord>> {
    let result = catalog.list_products().await;
    if let Err(err) = &result {
        event!(Level::ERROR, err = err.to_string(), "failed to load products");
    }
    Loaded::from_fetch(result)
}

/// Fetch the product named by the `raw_id` path segment.
///
/// An id that does not parse cannot name a product, so it is reported as
/// missing without asking the remote service.
pub(crate) async fn load_product<T: ProductRepository>(catalog: &T, raw_id: &str) -> Loaded<ProductRecord> {
    let product_id = match raw_id.parse::<ProductId>() {
        Ok(product_id) => product_id,
        Err(err) => {
            event!(Level::DEBUG, err = err.to_string(), raw_id, "not a product id");
            return Loaded::NotFound;
        }
    };

    let result = catalog.get_product(product_id).await;
    if let Err(err) = &result {
        event!(Level::ERROR, err = err.to_string(), %product_id, "failed to load product");
    }
    Loaded::from_lookup(result)
}
