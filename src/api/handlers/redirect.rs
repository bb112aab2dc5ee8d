//! Handler for alias redirects.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::response::ApiResponse;
use crate::error::StorageError;
use crate::state::AppState;

/// Resolves an alias and redirects to the stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Responses
///
/// - success       → HTTP 302 Found with `Location` set to the target URL
/// - unknown alias → HTTP 404 `{"status":"Error","error":"not found"}`
/// - empty alias   → HTTP 200 `"invalid request"` (no storage call made)
/// - other failure → HTTP 200 `"internal error"` (cause logged, not leaked)
pub async fn redirect_handler(State(state): State<AppState>, Path(alias): Path<String>) -> Response {
    if alias.is_empty() {
        tracing::info!("alias is empty");
        return Json(ApiResponse::error("invalid request")).into_response();
    }

    match state.getter.get_url(&alias).await {
        Ok(url) => {
            tracing::info!(%alias, %url, "got url");
            (StatusCode::FOUND, [(header::LOCATION, url)]).into_response()
        }
        Err(StorageError::NotFound) => {
            tracing::info!(%alias, "url not found");
            (StatusCode::NOT_FOUND, Json(ApiResponse::error("not found"))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to get url");
            Json(ApiResponse::error("internal error")).into_response()
        }
    }
}
