//! Handler for the save endpoint.

use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::api::response::ApiResponse;
use crate::error::StorageError;
use crate::state::AppState;
use crate::utils::alias::generate_alias;

/// Length of generated aliases when the client does not supply one.
const ALIAS_LENGTH: usize = 6;

/// Saves a URL mapping with a client-supplied or generated alias.
///
/// # Endpoint
///
/// `POST /url` — body: `{"url": "...", "alias": "..."}` (alias optional)
///
/// Failure is signaled through the `status` field of the body while the HTTP
/// status stays 200; existing clients depend on that contract. The body is
/// read raw rather than through the `Json` extractor so that an empty body
/// and an undecodable body produce their distinct documented responses.
///
/// # Responses (all HTTP 200)
///
/// - empty body            → `{"status":"Error","error":"empty request"}`
/// - undecodable body      → `"failed to decode request"`
/// - field validation      → `"field URL is a required field"`, ...
/// - alias already mapped  → `"url already exists"`
/// - other storage failure → `"failed to add url"` (cause logged, not leaked)
/// - success               → `{"status":"OK","alias":"<alias>"}`
pub async fn save_handler(State(state): State<AppState>, body: Bytes) -> Json<SaveResponse> {
    if body.is_empty() {
        tracing::error!("request body is empty");
        return Json(SaveResponse::error("empty request"));
    }

    let request: SaveRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(error = %e, "failed to decode request body");
            return Json(SaveResponse::error("failed to decode request"));
        }
    };

    tracing::info!(url = %request.url, alias = ?request.alias, "request body decoded");

    if let Err(errors) = request.validate() {
        tracing::error!(error = %errors, "invalid request");
        return Json(SaveResponse {
            response: ApiResponse::validation_error(&errors),
            alias: None,
        });
    }

    // Collision handling is deferred to the store's unique constraint, so a
    // generated alias needs no availability check here.
    let alias = match request.alias {
        Some(alias) if !alias.is_empty() => alias,
        _ => generate_alias(ALIAS_LENGTH),
    };

    match state.saver.save_url(&request.url, &alias).await {
        Ok(id) => {
            tracing::info!(id, %alias, "url added");
            Json(SaveResponse::ok(alias))
        }
        Err(StorageError::AliasExists) => {
            tracing::info!(url = %request.url, %alias, "url already exists");
            Json(SaveResponse::error("url already exists"))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to add url");
            Json(SaveResponse::error("failed to add url"))
        }
    }
}
