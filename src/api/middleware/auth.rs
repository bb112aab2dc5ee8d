//! HTTP basic authentication middleware for the save route.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_auth::AuthBasic;

use crate::api::response::ApiResponse;
use crate::state::AppState;

/// Authenticates requests against the configured basic-auth credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic <base64(user:password)>
/// ```
///
/// Returns `401 Unauthorized` with a `WWW-Authenticate: Basic` header when
/// the header is missing, malformed, or the credentials do not match.
/// The redirect route stays public; only mutation goes through this layer.
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let credentials = AuthBasic::from_request_parts(&mut parts, &()).await.ok();
    let authorized = matches!(
        &credentials,
        Some(AuthBasic((user, Some(password))))
            if *user == state.auth_user && *password == state.auth_password
    );

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Basic realm=\"shortly\"")],
            Json(ApiResponse::error("unauthorized")),
        )
            .into_response();
    }

    next.run(Request::from_parts(parts, body)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::save_handler;
    use crate::domain::repositories::{MockUrlGetter, MockUrlSaver, UrlGetter, UrlSaver};
    use axum::{Router, middleware, routing::post};
    use axum_test::TestServer;
    use base64::Engine as _;
    use serde_json::json;
    use std::sync::Arc;

    fn basic(user: &str, password: &str) -> String {
        let encoded =
            base64::engine::general_purpose::STANDARD.encode(format!("{user}:{password}"));
        format!("Basic {encoded}")
    }

    fn test_server(saver: MockUrlSaver) -> TestServer {
        let state = AppState {
            saver: Arc::new(saver) as Arc<dyn UrlSaver>,
            getter: Arc::new(MockUrlGetter::new()) as Arc<dyn UrlGetter>,
            auth_user: "admin".to_string(),
            auth_password: "secret".to_string(),
        };
        let app = Router::new()
            .route("/url", post(save_handler))
            .route_layer(middleware::from_fn_with_state(state.clone(), layer))
            .with_state(state);
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_missing_credentials_yield_401() {
        let server = test_server(MockUrlSaver::new());
        let response = server
            .post("/url")
            .json(&json!({"url": "https://google.com"}))
            .await;

        response.assert_status_unauthorized();
        assert!(response.header("www-authenticate").to_str().unwrap().starts_with("Basic"));
    }

    #[tokio::test]
    async fn test_wrong_password_yields_401() {
        let server = test_server(MockUrlSaver::new());
        let response = server
            .post("/url")
            .add_header("authorization", basic("admin", "wrong"))
            .json(&json!({"url": "https://google.com"}))
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_valid_credentials_pass_through() {
        let mut saver = MockUrlSaver::new();
        saver.expect_save_url().once().returning(|_, _| Ok(1));

        let server = test_server(saver);
        let response = server
            .post("/url")
            .add_header("authorization", basic("admin", "secret"))
            .json(&json!({"url": "https://google.com", "alias": "abc123"}))
            .await;

        response.assert_status_ok();
    }
}
