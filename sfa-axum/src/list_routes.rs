//! The product list page and its in-page actions.
//!
//! Navigating to `/products` fetches the products and starts a fresh working
//! set. The actions below work on that working set and answer with a
//! redirect back to the list, which then renders from the working set
//! instead of fetching again. Reloading the page fetches again and discards
//! any local changes.

use crate::{
    Catalog, Panel, loader,
    render::{Choice, ProductView},
    session::BrowserSession,
};
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Redirect, Response},
    routing::{get, post},
};
use serde::Serialize;
use sfa_core::{
    models::{Loaded, ProductId, category_label},
    ports::ProductRepository as _,
    view::{ListQuery, ProductList, SortKey},
};
use tracing::{Level, event};

const LIST_PATH: &str = "/products";

/// Creates a router with the list page and its actions.
pub fn router<T: Catalog>() -> Router<Panel<T>> {
    Router::new()
        .route(LIST_PATH, get(list_page::<T>))
        .route("/products/actions/filter", post(apply_filters))
        .route("/products/actions/clear", post(clear_filters))
        .route("/products/{product_id}/delete", post(request_delete))
        .route("/products/actions/delete/confirm", post(confirm_delete::<T>))
        .route("/products/actions/delete/cancel", post(cancel_delete))
}

#[derive(Serialize)]
struct ListPage {
    title: &'static str,
    /// Where the page reloads itself to while a delete is outstanding
    href: String,
    search: String,
    categories: Vec<Choice>,
    sorts: Vec<Choice>,
    total: usize,
    shown: usize,
    products: Vec<ProductView>,
    dialog: Option<DeleteDialog>,
}

#[derive(Serialize)]
struct DeleteDialog {
    title: String,
    error: Option<String>,
    busy: bool,
}

impl From<&ProductList> for ListPage {
    fn from(list: &ProductList) -> Self {
        let query = list.query();

        let categories = std::iter::once(Choice {
            value: "all".to_string(),
            label: "All Categories".to_string(),
            selected: query.category.is_none(),
        })
        .chain(list.categories().iter().map(|category| Choice {
            value: category.clone(),
            label: category_label(category),
            selected: query.category.as_ref() == Some(category),
        }))
        .collect();

        let sorts = SortKey::ALL
            .into_iter()
            .map(|key| Choice {
                value: key.as_str().to_string(),
                label: key.label().to_string(),
                selected: key == query.sort,
            })
            .collect();

        let delete = list.delete();
        let dialog = delete.target().map(|target| DeleteDialog {
            title: target.data.title.clone(),
            error: delete.error().map(str::to_owned),
            busy: delete.is_busy(),
        });

        Self {
            title: "Products - Admin",
            href: query.href(LIST_PATH),
            search: query.search.clone(),
            categories,
            sorts,
            total: list.products().len(),
            shown: list.view().len(),
            products: list.view().iter().map(ProductView::from).collect(),
            dialog,
        }
    }
}

/// Render the product list.
///
/// After an in-page action the session's working set is reused with the
/// URL's parameters applied; otherwise the products are fetched anew.
async fn list_page<T: Catalog>(
    State(panel): State<Panel<T>>,
    session: BrowserSession,
    Query(query): Query<ListQuery>,
) -> (BrowserSession, Response) {
    let loaded = match session.resume(query.clone()) {
        Some(list) => Loaded::Ready(list),
        None => {
            let loaded = loader::load_products(&panel.catalog)
                .await
                .map(|products| ProductList::new(products, query));
            session.replace(match &loaded {
                Loaded::Ready(list) => Some(list.clone()),
                _ => None,
            });
            loaded
        }
    };

    let response = match &loaded {
        Loaded::Ready(list) => {
            panel
                .templates
                .render(StatusCode::OK, "list.html", &ListPage::from(list))
        }
        _ => {
            let message = format!(
                "Failed to load products: {}",
                loaded.error_message().unwrap_or_default()
            );
            panel.templates.failure(&loaded, message, None)
        }
    };

    (session, response)
}

/// The list URL for the session's current parameters.
fn list_href(session: &BrowserSession) -> String {
    session
        .update(|list| list.query().href(LIST_PATH))
        .unwrap_or_else(|| LIST_PATH.to_string())
}

/// Apply new search, category and sort parameters.
async fn apply_filters(
    session: BrowserSession,
    Form(query): Form<ListQuery>,
) -> (BrowserSession, Redirect) {
    let href = query.href(LIST_PATH);
    session.update(|list| list.set_query(query));
    (session, Redirect::to(&href))
}

/// Reset search, category and sort to their defaults.
async fn clear_filters(session: BrowserSession) -> (BrowserSession, Redirect) {
    session.update(ProductList::clear_filters);
    (session, Redirect::to(LIST_PATH))
}

/// Ask for confirmation before deleting a product.
async fn request_delete(
    session: BrowserSession,
    Path(product_id): Path<String>,
) -> (BrowserSession, Redirect) {
    match product_id.parse::<ProductId>() {
        Ok(product_id) => {
            session.update(|list| list.request_delete(product_id));
        }
        Err(err) => event!(Level::DEBUG, err = err.to_string(), "not a product id"),
    }
    let href = list_href(&session);
    (session, Redirect::to(&href))
}

/// Delete the product awaiting confirmation.
///
/// On success the product is dropped from the working set without a
/// refetch. On failure the confirmation stays open with the error.
async fn confirm_delete<T: Catalog>(
    State(panel): State<Panel<T>>,
    session: BrowserSession,
) -> (BrowserSession, Redirect) {
    if let Some(product_id) = session.update(ProductList::begin_delete).flatten() {
        let result = panel
            .catalog
            .delete_product(product_id)
            .await
            .map_err(|err| {
                event!(Level::ERROR, err = err.to_string(), %product_id, "failed to delete product");
                err.to_string()
            });
        session.update(|list| list.finish_delete(result));
    }
    let href = list_href(&session);
    (session, Redirect::to(&href))
}

/// Dismiss the confirmation without deleting anything.
async fn cancel_delete(session: BrowserSession) -> (BrowserSession, Redirect) {
    session.update(ProductList::cancel_delete);
    let href = list_href(&session);
    (session, Redirect::to(&href))
}
