use axum::body::Bytes;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::{debug, info, warn};

use super::auth::require_function_key;
use super::domain::{parse_request, VerificationOutcome};
use crate::config::AuthConfig;

/// Path of the validation endpoint.
pub const VALIDATE_CPF_PATH: &str = "/api/fnvalidacpf";

/// Router exposing the CPF validation endpoint behind the optional function key.
pub fn verification_router(auth: AuthConfig) -> Router {
    Router::new()
        .route(VALIDATE_CPF_PATH, post(validate_cpf_handler))
        .route_layer(middleware::from_fn_with_state(auth, require_function_key))
}

/// Reads the raw body so that an empty request maps to the missing-CPF outcome
/// instead of an extractor rejection.
pub(crate) async fn validate_cpf_handler(body: Bytes) -> Response {
    info!("starting CPF validation");

    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(error) => {
            warn!(%error, "rejected malformed CPF payload");
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let outcome = VerificationOutcome::from_request(request.as_ref());
    debug!(outcome = outcome.label(), "CPF validation finished");

    (outcome.status(), Json(outcome.response())).into_response()
}
