//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::repositories::{UrlGetter, UrlSaver};

/// Handler dependencies, constructed once at startup and cloned per request.
///
/// Handlers depend on the narrow repository traits rather than the concrete
/// storage engine, so tests can substitute mock doubles.
#[derive(Clone)]
pub struct AppState {
    pub saver: Arc<dyn UrlSaver>,
    pub getter: Arc<dyn UrlGetter>,
    pub auth_user: String,
    pub auth_password: String,
}

impl AppState {
    pub fn new(saver: Arc<dyn UrlSaver>, getter: Arc<dyn UrlGetter>, config: &Config) -> Self {
        Self {
            saver,
            getter,
            auth_user: config.auth_user.clone(),
            auth_password: config.auth_password.clone(),
        }
    }
}
