//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domains::account::{AccountService, UserStore};
use crate::server::routes::{
    events_handler, health_handler, home_handler, login_handler, profile_handler,
    register_event_handler, register_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
}

/// Build the Axum application router.
///
/// The storage backend is injected so tests can run the full HTTP stack
/// against an in-memory store.
pub fn build_app(store: Arc<dyn UserStore>, allowed_origins: &[String]) -> Router {
    let app_state = AppState {
        accounts: Arc::new(AccountService::new(store)),
    };

    // CORS allow-list from configuration; malformed entries are skipped
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/events", get(events_handler))
        .route("/register-event", post(register_event_handler))
        .route("/profile/:username", get(profile_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
}
