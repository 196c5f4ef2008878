#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the sfa-axum crate.
//! [sfa_core]: https://docs.rs/sfa_core/latest/sfa_core/index.html
//! [sfa_axum]: https://docs.rs/sfa_axum/latest/sfa_axum/index.html
//! [sfa_rest]: https://docs.rs/sfa_rest/latest/sfa_rest/index.html
#![doc = include_str!("../README.md")]

mod api_routes;
mod assets;
mod list_routes;
mod loader;
mod product_routes;
mod render;
mod session;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json, response::Redirect};
use render::Templates;
use schemars::JsonSchema;
use serde::Serialize;
use session::SessionStore;
use sfa_core::ports::ProductRepository;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// The state every route is handed: the product source, the per-browser
/// working sets, and the compiled page templates.
#[derive(Clone)]
pub(crate) struct Panel<T> {
    pub(crate) catalog: T,
    pub(crate) sessions: SessionStore,
    pub(crate) templates: Arc<Templates>,
}

/// Construct the full panel router for the given catalog and config
///
/// # Errors
///
/// Fails if the built-in page templates do not compile.
pub fn router<T: Catalog>(catalog: T, config: AxumConfig) -> Result<axum::Router, tera::Error> {
    let panel = Panel {
        catalog,
        sessions: SessionStore::new(config.session_ttl),
        templates: Arc::new(Templates::load()?),
    };

    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .api_route("/health", get(health_check))
        .nest("/api", api_routes::router::<T>())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs)
        .merge(list_routes::router::<T>())
        .merge(product_routes::router::<T>())
        .route(
            "/",
            axum::routing::get(|| async { Redirect::to("/products") }),
        )
        .route("/placeholder.svg", axum::routing::get(assets::placeholder))
        .layer(Extension(Arc::new(api))) // Arc is very important here or you will face massive memory and performance issues
        .layer(TraceLayer::new_for_http())
        .with_state(panel);

    Ok(router)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: Catalog>(config: AxumConfig, catalog: T) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let service = router(catalog, config).map_err(std::io::Error::other)?;
    axum::serve(listener, service).await
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. Any `T: Catalog` can back the panel.
pub trait Catalog: ProductRepository + Clone + Send + Sync + 'static {}

// this is the blanket implementation
impl<T> Catalog for T where T: ProductRepository + Clone + Send + Sync + 'static {}
