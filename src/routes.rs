//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /url`     - Save a URL mapping (basic auth required)
//! - `GET  /{alias}` - Alias redirect (public)
//!
//! # Middleware
//!
//! - **Request IDs** - `x-request-id` generated per request and propagated
//!   to the response
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Basic auth on the save route only

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::api::handlers::{redirect_handler, save_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let save_routes = Router::new()
        .route("/url", post(save_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(save_routes)
        .route("/{alias}", get(redirect_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(tracing::layer())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
