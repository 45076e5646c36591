use crate::error::GatewayError;
use crate::handler::SharedExtractor;
use axum::Extension;
use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use crater_numbering::PlaceholderExtractor;
use serde_json::Value;
use tracing::debug;

#[derive(serde::Deserialize, Debug, Default)]
pub struct FormatParams {
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
pub struct PlaceholdersResponse {
    pub success: bool,
    pub placeholders: Value,
}

/// `None` and `""` both count as no format. `"0"` is a format.
#[inline]
pub fn is_absent_or_empty(format: Option<&str>) -> bool {
    format.is_none_or(str::is_empty)
}

fn resolve(
    extractor: &dyn PlaceholderExtractor,
    format: Option<&str>,
) -> PlaceholdersResponse {
    let placeholders = match format {
        Some(f) if !is_absent_or_empty(format) => {
            let out = extractor.extract(f);
            debug!(format = f, result = %out, "extracted placeholders");
            out
        }
        _ => Value::Array(Vec::new()),
    };
    PlaceholdersResponse {
        success: true,
        placeholders,
    }
}

#[axum::debug_handler]
pub async fn get_placeholders(
    Extension(extractor): Extension<SharedExtractor>,
    query: Result<Query<FormatParams>, QueryRejection>,
) -> Result<Json<PlaceholdersResponse>, GatewayError> {
    let Query(params) = query?;
    Ok(Json(resolve(extractor.as_ref(), params.format.as_deref())))
}

#[axum::debug_handler]
pub async fn post_placeholders(
    Extension(extractor): Extension<SharedExtractor>,
    body: Result<Json<FormatParams>, JsonRejection>,
) -> Result<Json<PlaceholdersResponse>, GatewayError> {
    let Json(params) = body?;
    Ok(Json(resolve(extractor.as_ref(), params.format.as_deref())))
}
