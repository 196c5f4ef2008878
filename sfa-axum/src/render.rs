//! Page templates and the view structs they are rendered from.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use sfa_core::models::{Loaded, ProductRecord};
use tera::Tera;
use tracing::{Level, event};

/// Where products without an image point instead.
pub(crate) const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Descriptions on the product cards are cut to this many characters.
const EXCERPT_LENGTH: usize = 100;

/// The compiled page templates.
pub(crate) struct Templates(Tera);

impl Templates {
    /// Compile the built-in templates.
    pub(crate) fn load() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates([
            ("base.html", include_str!("../templates/base.html")),
            ("list.html", include_str!("../templates/list.html")),
            ("detail.html", include_str!("../templates/detail.html")),
            ("form.html", include_str!("../templates/form.html")),
            ("message.html", include_str!("../templates/message.html")),
        ])?;
        Ok(Self(tera))
    }

    /// Render `template` from `page`, answering with `status`.
    ///
    /// A template that fails to render is logged and answered with a plain 500.
    pub(crate) fn render(&self, status: StatusCode, template: &str, page: &impl Serialize) -> Response {
        let html = tera::Context::from_serialize(page)
            .and_then(|context| self.0.render(template, &context));

        match html {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                event!(Level::ERROR, err = err.to_string(), template);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to render page".to_string(),
                )
                    .into_response()
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn render_html(&self, template: &str, page: &impl Serialize) -> String {
        let context = tera::Context::from_serialize(page).unwrap();
        self.0.render(template, &context).unwrap()
    }

    /// Render the page shown in place of content that could not be loaded.
    ///
    /// A missing product answers 404; a failed request answers 502.
    pub(crate) fn failure<T>(&self, loaded: &Loaded<T>, message: String, back: Option<&str>) -> Response {
        let status = match loaded {
            Loaded::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        };
        self.render(
            status,
            "message.html",
            &MessagePage {
                title: "Error",
                message,
                back,
            },
        )
    }
}

#[derive(Serialize)]
struct MessagePage<'a> {
    title: &'static str,
    message: String,
    back: Option<&'a str>,
}

/// A product as the templates display it.
#[derive(Debug, Serialize)]
pub(crate) struct ProductView {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) excerpt: String,
    pub(crate) category: String,
    pub(crate) image: String,
    pub(crate) price: String,
    pub(crate) rate: String,
    pub(crate) count: u32,
    pub(crate) full_stars: usize,
    pub(crate) empty_stars: usize,
}

impl From<&ProductRecord> for ProductView {
    fn from(product: &ProductRecord) -> Self {
        let data = &product.data;
        let full_stars = data.rating.rate.floor().clamp(0.0, 5.0) as usize;

        Self {
            id: product.id.into(),
            title: data.title.clone(),
            description: data.description.clone(),
            excerpt: truncate(&data.description, EXCERPT_LENGTH),
            category: data.category.clone(),
            image: data.image_url().unwrap_or(PLACEHOLDER_IMAGE).to_owned(),
            price: format_price(data.price),
            rate: data.rating.rate.to_string(),
            count: data.rating.count,
            full_stars,
            empty_stars: 5 - full_stars,
        }
    }
}

/// A choice in a `<select>`.
#[derive(Debug, Serialize)]
pub(crate) struct Choice {
    pub(crate) value: String,
    pub(crate) label: String,
    pub(crate) selected: bool,
}

pub(crate) fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Cut `text` to `limit` characters, marking the cut with `...`.
pub(crate) fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_owned(),
    }
}
