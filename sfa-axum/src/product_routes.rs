//! Pages for a single product: details, and the create and edit forms.
//!
//! A form submission that the remote service rejects re-renders the form
//! with the submitted values and the error, so nothing typed is lost.

use crate::{
    Catalog, Panel, loader,
    render::{Choice, ProductView},
};
use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Serialize;
use sfa_core::{
    models::{CATEGORY_OPTIONS, Loaded, ProductForm, ProductId, ProductRecord},
    ports::ProductRepository as _,
};
use tracing::{Level, event};

/// Creates a router with the detail, create and edit pages.
pub fn router<T: Catalog>() -> Router<Panel<T>> {
    Router::new()
        .route(
            "/products/create",
            get(create_form::<T>).post(create_product::<T>),
        )
        .route("/products/{product_id}", get(product_detail::<T>))
        .route(
            "/products/{product_id}/edit",
            get(edit_form::<T>).post(update_product::<T>),
        )
}

#[derive(Serialize)]
struct DetailPage {
    title: String,
    product: ProductView,
}

#[derive(Serialize)]
struct FormPage {
    title: &'static str,
    heading: &'static str,
    action: String,
    back: String,
    submit: &'static str,
    /// Only set when editing; the id is shown but cannot be changed
    product_id: Option<u64>,
    /// The preview: the draft's image URL, or the placeholder
    image: String,
    form: ProductForm,
    categories: Vec<Choice>,
    error: Option<String>,
}

impl FormPage {
    fn create(form: ProductForm, error: Option<String>) -> Self {
        Self {
            title: "Create Product | Aqtar",
            heading: "Create New Product",
            action: "/products/create".to_string(),
            back: "/products".to_string(),
            submit: "Create Product",
            product_id: None,
            image: preview_image(&form),
            categories: category_choices(&form.category),
            form,
            error,
        }
    }

    fn edit(product_id: ProductId, form: ProductForm, error: Option<String>) -> Self {
        Self {
            title: "Edit Product | Aqtar",
            heading: "Edit Product",
            action: format!("/products/{product_id}/edit"),
            back: format!("/products/{product_id}"),
            submit: "Save Changes",
            product_id: Some(product_id.into()),
            image: preview_image(&form),
            categories: category_choices(&form.category),
            form,
            error,
        }
    }
}

/// The category dropdown for a draft.
///
/// A category outside the fixed set is kept as an extra choice, so saving a
/// product does not silently change its category.
fn category_choices(current: &str) -> Vec<Choice> {
    let mut choices = CATEGORY_OPTIONS
        .iter()
        .map(|option| Choice {
            value: option.value.to_string(),
            label: option.label.to_string(),
            selected: option.value == current,
        })
        .collect::<Vec<_>>();

    if !choices.iter().any(|choice| choice.selected) {
        choices.push(Choice {
            value: current.to_string(),
            label: current.to_string(),
            selected: true,
        });
    }
    choices
}

fn preview_image(form: &ProductForm) -> String {
    form.to_data()
        .image_url()
        .unwrap_or(crate::render::PLACEHOLDER_IMAGE)
        .to_owned()
}

/// Render the failure page for a product that could not be loaded.
fn product_failure<T: Catalog>(panel: &Panel<T>, loaded: &Loaded<ProductRecord>) -> Response {
    let message = loaded.error_message().unwrap_or_default().to_string();
    panel.templates.failure(loaded, message, Some("/products"))
}

/// Show one product.
async fn product_detail<T: Catalog>(
    State(panel): State<Panel<T>>,
    Path(product_id): Path<String>,
) -> Response {
    match loader::load_product(&panel.catalog, &product_id).await {
        Loaded::Ready(product) => panel.templates.render(
            StatusCode::OK,
            "detail.html",
            &DetailPage {
                title: format!("{} | Aqtar", product.data.title),
                product: ProductView::from(&product),
            },
        ),
        loaded => product_failure(&panel, &loaded),
    }
}

/// Show an empty create form.
async fn create_form<T: Catalog>(State(panel): State<Panel<T>>) -> Response {
    panel.templates.render(
        StatusCode::OK,
        "form.html",
        &FormPage::create(ProductForm::blank(), None),
    )
}

/// Create a product from the submitted form.
///
/// Numeric fields are coerced rather than validated: blank or invalid
/// input is sent as `0`.
async fn create_product<T: Catalog>(
    State(panel): State<Panel<T>>,
    Form(form): Form<ProductForm>,
) -> Response {
    match panel.catalog.create_product(form.to_data()).await {
        Ok(product_id) => {
            event!(Level::INFO, product_id = ?product_id, "created product");
            Redirect::to("/products").into_response()
        }
        Err(err) => {
            event!(Level::ERROR, err = err.to_string());
            panel.templates.render(
                StatusCode::BAD_GATEWAY,
                "form.html",
                &FormPage::create(form, Some(err.to_string())),
            )
        }
    }
}

/// Show the edit form for a product.
async fn edit_form<T: Catalog>(
    State(panel): State<Panel<T>>,
    Path(product_id): Path<String>,
) -> Response {
    match loader::load_product(&panel.catalog, &product_id).await {
        Loaded::Ready(product) => {
            panel.templates.render(
                StatusCode::OK,
                "form.html",
                &FormPage::edit(product.id, ProductForm::from(&product), None),
            )
        }
        loaded => product_failure(&panel, &loaded),
    }
}

/// Replace a product with the submitted form.
async fn update_product<T: Catalog>(
    State(panel): State<Panel<T>>,
    Path(product_id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Response {
    let Ok(product_id) = product_id.parse::<ProductId>() else {
        return product_failure(&panel, &Loaded::NotFound);
    };

    let record = ProductRecord::new(product_id, form.to_data());
    match panel.catalog.update_product(record).await {
        Ok(_) => Redirect::to(&format!("/products/{product_id}")).into_response(),
        Err(err) => {
            event!(Level::ERROR, err = err.to_string(), %product_id);
            panel.templates.render(
                StatusCode::BAD_GATEWAY,
                "form.html",
                &FormPage::edit(product_id, form, Some(err.to_string())),
            )
        }
    }
}
