//! # Responsible Routes
//!
//! CRUD over responsibles. The list is unpaged; responsibles number in
//! the dozens, not the thousands.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use kanban_core::ResponsibleId;

use crate::auth::AuthUser;
use crate::dto::{ResponsibleRequest, ResponsibleResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Assemble the responsible router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/responsibles", post(create_responsible).get(list_responsibles))
        .route(
            "/responsibles/{id}",
            get(get_responsible)
                .put(update_responsible)
                .delete(delete_responsible),
        )
}

/// Create a responsible.
#[utoipa::path(
    post,
    path = "/api/responsibles",
    tag = "responsibles",
    request_body = ResponsibleRequest,
    responses(
        (status = 201, description = "Responsible created", body = ResponsibleResponse),
        (status = 400, description = "Validation failed or email already registered"),
    ),
)]
pub async fn create_responsible(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<ResponsibleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.responsibles.create(request, &user.username).await?;
    let location = format!("/api/responsibles/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// All responsibles, ordered by name.
#[utoipa::path(
    get,
    path = "/api/responsibles",
    tag = "responsibles",
    responses(
        (status = 200, description = "All responsibles", body = [ResponsibleResponse]),
    ),
)]
pub async fn list_responsibles(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<ResponsibleResponse>>, ApiError> {
    let all = state.responsibles.find_all(&user.username).await?;
    Ok(Json(all))
}

/// Responsible detail.
#[utoipa::path(
    get,
    path = "/api/responsibles/{id}",
    tag = "responsibles",
    params(("id" = Uuid, Path, description = "Responsible id")),
    responses(
        (status = 200, description = "The responsible", body = ResponsibleResponse),
        (status = 404, description = "Unknown responsible"),
    ),
)]
pub async fn get_responsible(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ResponsibleResponse>, ApiError> {
    let responsible = state
        .responsibles
        .find_by_id(ResponsibleId(id), &user.username)
        .await?;
    Ok(Json(responsible))
}

/// Full update of a responsible.
#[utoipa::path(
    put,
    path = "/api/responsibles/{id}",
    tag = "responsibles",
    params(("id" = Uuid, Path, description = "Responsible id")),
    request_body = ResponsibleRequest,
    responses(
        (status = 200, description = "Updated responsible", body = ResponsibleResponse),
        (status = 404, description = "Unknown responsible"),
    ),
)]
pub async fn update_responsible(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<ResponsibleRequest>,
) -> Result<Json<ResponsibleResponse>, ApiError> {
    let responsible = state
        .responsibles
        .update(ResponsibleId(id), request, &user.username)
        .await?;
    Ok(Json(responsible))
}

/// Remove a responsible.
#[utoipa::path(
    delete,
    path = "/api/responsibles/{id}",
    tag = "responsibles",
    params(("id" = Uuid, Path, description = "Responsible id")),
    responses(
        (status = 204, description = "Responsible removed"),
        (status = 404, description = "Unknown responsible"),
    ),
)]
pub async fn delete_responsible(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .responsibles
        .delete(ResponsibleId(id), &user.username)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
