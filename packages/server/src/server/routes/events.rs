use axum::extract::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::domains::account::AccountError;
use crate::domains::events::{list_events, EventCatalog};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterEventRequest {
    pub username: String,
    pub event: String,
}

/// GET /events
pub async fn events_handler() -> Json<EventCatalog> {
    Json(list_events())
}

/// POST /register-event
pub async fn register_event_handler(
    Extension(state): Extension<AppState>,
    Json(body): Json<RegisterEventRequest>,
) -> Result<Json<serde_json::Value>, AccountError> {
    let event = state
        .accounts
        .register_for_event(&body.username, &body.event)
        .await?;

    Ok(Json(json!({ "message": format!("Registered for {}", event) })))
}
