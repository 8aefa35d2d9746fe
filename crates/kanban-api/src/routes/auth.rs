//! # Auth Routes
//!
//! Credential login issuing a JWT. Unauthenticated by construction — this
//! route sits outside the protected `/api` tree.

use axum::extract::State;
use axum::Json;
use metrics::counter;

use crate::dto::{LoginRequest, TokenResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticate with username/password and receive a bearer token.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid credentials"),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    if request.username != state.credentials.username
        || request.password != state.credentials.password
    {
        counter!("kanban_logins_total", "outcome" => "rejected").increment(1);
        tracing::warn!(username = %request.username, "login rejected");
        return Err(ApiError::Unauthorized("invalid credentials".to_string()));
    }

    let token = state.jwt.issue(&request.username)?;
    counter!("kanban_logins_total", "outcome" => "accepted").increment(1);
    tracing::info!(username = %request.username, "login accepted");
    Ok(Json(TokenResponse { token }))
}
