use axum::extract::{Extension, Path};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domains::account::{AccountError, UserProfile};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email_or_username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
}

/// POST /register
pub async fn register_handler(
    Extension(state): Extension<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<serde_json::Value>, AccountError> {
    state
        .accounts
        .register(&body.email, &body.username, &body.password)
        .await?;

    Ok(Json(json!({ "message": "User registered successfully" })))
}

/// POST /login
pub async fn login_handler(
    Extension(state): Extension<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AccountError> {
    let username = state
        .accounts
        .login(&body.email_or_username, &body.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        username,
    }))
}

/// GET /profile/:username
pub async fn profile_handler(
    Extension(state): Extension<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserProfile>, AccountError> {
    let profile = state.accounts.get_profile(&username).await?;
    Ok(Json(profile))
}
