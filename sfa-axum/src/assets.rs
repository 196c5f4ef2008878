use axum::{http::header, response::IntoResponse};

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400" viewBox="0 0 400 400" fill="none">
  <rect width="400" height="400" fill="#EAEAEA"/>
  <g stroke="#A3A3A3" stroke-width="12" stroke-linecap="round" stroke-linejoin="round">
    <rect x="110" y="120" width="180" height="160" rx="12"/>
    <circle cx="160" cy="175" r="18"/>
    <path d="M110 250l55-50 40 35 30-25 55 45"/>
  </g>
</svg>
"##;

/// The image shown for products without one.
pub(crate) async fn placeholder() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        PLACEHOLDER_SVG,
    )
}
