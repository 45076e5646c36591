use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::IntoResponse;
use http::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidBody(r) => r.status(),
            GatewayError::InvalidQuery(r) => r.status(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::InvalidBody(_) => "INVALID_BODY",
            GatewayError::InvalidQuery(_) => "INVALID_QUERY",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({
            "error": { "code": self.code(), "message": self.to_string() }
        });
        let mut resp = (self.status(), body.to_string()).into_response();
        resp.headers_mut().insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        resp
    }
}
