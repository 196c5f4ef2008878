//! JSON endpoints mirroring the list page.

use crate::{Catalog, Panel};
use aide::{
    axum::{ApiRouter, routing::get_with},
    transform::TransformOperation,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use schemars::JsonSchema;
use serde::Serialize;
use sfa_core::{
    models::ProductRecord,
    ports::ProductRepository as _,
    view::{ListQuery, ProductList},
};
use tracing::{Level, event};

/// The filtered and sorted product list.
#[derive(Serialize, JsonSchema)]
struct ProductsView {
    /// How many products the remote service returned
    total: usize,
    /// How many products passed the filters
    shown: usize,
    /// The distinct categories of all products, in order of first appearance
    categories: Vec<String>,
    /// The parameters the view was computed from
    query: ListQuery,
    /// The products that passed the filters, in display order
    products: Vec<ProductRecord>,
}

impl From<ProductList> for ProductsView {
    fn from(list: ProductList) -> Self {
        Self {
            total: list.products().len(),
            shown: list.view().len(),
            categories: list.categories().to_vec(),
            query: list.query().clone(),
            products: list.view().to_vec(),
        }
    }
}

/// Creates a router with the JSON endpoints.
pub fn router<T: Catalog>() -> ApiRouter<Panel<T>> {
    ApiRouter::new().api_route_with(
        "/products",
        get_with(list_products::<T>, list_products_docs),
        |route| route.tag("products"),
    )
}

/// Fetch the products and apply the list parameters to them.
async fn list_products<T: Catalog>(
    State(panel): State<Panel<T>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ProductsView>, (StatusCode, String)> {
    let products = panel.catalog.list_products().await.map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        (
            StatusCode::BAD_GATEWAY,
            format!("failed to load products: {err}"),
        )
    })?;

    Ok(Json(ProductList::new(products, query).into()))
}

fn list_products_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("List products")
        .description(
            r#"
            Fetch every product from the remote service, then filter and sort
            them exactly as the list page does. `category` may be omitted or
            `all` to keep every category; unknown `sort` values sort by id.
            "#,
        )
        .response_with::<502, String, _>(|res| res.description("The remote service request failed"))
}
