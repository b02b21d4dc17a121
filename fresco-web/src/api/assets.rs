//! Embedded UI assets
//!
//! The stylesheet ships inside the binary so the service stays a single
//! self-contained executable.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

const STYLE_CSS: &str = include_str!("../ui/style.css");

/// GET /static/style.css
pub async fn serve_style_css() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css")],
        STYLE_CSS,
    )
        .into_response()
}
