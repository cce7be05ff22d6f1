use axum::extract::{Query, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::config::AuthConfig;

pub const FUNCTION_KEY_HEADER: &str = "x-functions-key";

#[derive(Debug, Default, Deserialize)]
pub struct FunctionKeyQuery {
    #[serde(default)]
    pub code: Option<String>,
}

/// Rejects requests that do not present the configured function key.
///
/// The key is read from the `x-functions-key` header, then from the `code`
/// query parameter. Without a configured key every request passes.
pub async fn require_function_key(
    State(auth): State<AuthConfig>,
    Query(query): Query<FunctionKeyQuery>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = auth.function_key.as_deref() else {
        return next.run(request).await;
    };

    let presented = presented_key(request.headers(), &query);
    let key_present = presented.is_some();
    let authorized = presented.is_some_and(|key| keys_match(key, expected));

    if authorized {
        return next.run(request).await;
    }

    warn!(
        path = %request.uri().path(),
        key_present,
        "rejected request without a valid function key"
    );
    let payload = json!({ "error": "missing or invalid function key" });
    (StatusCode::UNAUTHORIZED, Json(payload)).into_response()
}

fn presented_key<'a>(headers: &'a HeaderMap, query: &'a FunctionKeyQuery) -> Option<&'a str> {
    headers
        .get(FUNCTION_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .or(query.code.as_deref())
}

// Constant time over equal-length keys.
fn keys_match(presented: &str, expected: &str) -> bool {
    let (presented, expected) = (presented.as_bytes(), expected.as_bytes());
    if presented.len() != expected.len() {
        return false;
    }

    presented
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
