use crate::handler::rest::{get_placeholders, post_placeholders};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};
use crater_numbering::PlaceholderExtractor;
use http::StatusCode;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod rest;

pub use rest::{FormatParams, PlaceholdersResponse, is_absent_or_empty};

pub type SharedExtractor = Arc<dyn PlaceholderExtractor>;

pub const PLACEHOLDERS_PATH: &str = "/api/v1/number-placeholders";

pub fn build_router(extractor: SharedExtractor) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route(
            PLACEHOLDERS_PATH,
            get(get_placeholders).post(post_placeholders),
        )
        .route("/{*path}", get(no_found))
        .route("/", get(no_found))
        .layer(Extension(extractor))
        .layer(TraceLayer::new_for_http())
}

pub async fn no_found() -> Result<bytes::Bytes, Response> {
    Err((StatusCode::NOT_FOUND, String::from("NOT FOUND")).into_response())
}

pub async fn health() -> Result<bytes::Bytes, Response> {
    Ok(bytes::Bytes::from_static(b"ok"))
}

pub async fn healthz() -> Result<bytes::Bytes, Response> {
    Ok(bytes::Bytes::from_static(b"ok"))
}

pub async fn readyz() -> Result<bytes::Bytes, Response> {
    Ok(bytes::Bytes::from_static(b"ready"))
}
