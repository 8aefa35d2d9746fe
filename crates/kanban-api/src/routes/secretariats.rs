//! # Secretariat Routes
//!
//! CRUD with paging over secretariats.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use kanban_core::SecretariatId;

use crate::auth::AuthUser;
use crate::dto::{PageDto, SecretariatRequest, SecretariatResponse};
use crate::error::ApiError;
use crate::extractors::PageParams;
use crate::state::AppState;

/// Assemble the secretariat router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/secretariats",
            post(create_secretariat).get(list_secretariats),
        )
        .route(
            "/secretariats/{id}",
            get(get_secretariat)
                .put(update_secretariat)
                .delete(delete_secretariat),
        )
}

/// Create a secretariat.
#[utoipa::path(
    post,
    path = "/api/secretariats",
    tag = "secretariats",
    request_body = SecretariatRequest,
    responses(
        (status = 201, description = "Secretariat created", body = SecretariatResponse),
        (status = 400, description = "Validation failed"),
    ),
)]
pub async fn create_secretariat(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<SecretariatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.secretariats.create(request, &user.username).await?;
    let location = format!("/api/secretariats/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// One page of secretariats.
#[utoipa::path(
    get,
    path = "/api/secretariats",
    tag = "secretariats",
    params(PageParams),
    responses(
        (status = 200, description = "Page of secretariats", body = PageDto<SecretariatResponse>),
    ),
)]
pub async fn list_secretariats(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<PageParams>,
) -> Result<Json<PageDto<SecretariatResponse>>, ApiError> {
    let page = state
        .secretariats
        .find_all(params.into(), &user.username)
        .await?;
    Ok(Json(page))
}

/// Secretariat detail.
#[utoipa::path(
    get,
    path = "/api/secretariats/{id}",
    tag = "secretariats",
    params(("id" = Uuid, Path, description = "Secretariat id")),
    responses(
        (status = 200, description = "The secretariat", body = SecretariatResponse),
        (status = 404, description = "Unknown secretariat"),
    ),
)]
pub async fn get_secretariat(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<SecretariatResponse>, ApiError> {
    let secretariat = state
        .secretariats
        .find_by_id(SecretariatId(id), &user.username)
        .await?;
    Ok(Json(secretariat))
}

/// Full update of a secretariat.
#[utoipa::path(
    put,
    path = "/api/secretariats/{id}",
    tag = "secretariats",
    params(("id" = Uuid, Path, description = "Secretariat id")),
    request_body = SecretariatRequest,
    responses(
        (status = 200, description = "Updated secretariat", body = SecretariatResponse),
        (status = 404, description = "Unknown secretariat"),
    ),
)]
pub async fn update_secretariat(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<SecretariatRequest>,
) -> Result<Json<SecretariatResponse>, ApiError> {
    let secretariat = state
        .secretariats
        .update(SecretariatId(id), request, &user.username)
        .await?;
    Ok(Json(secretariat))
}

/// Remove a secretariat.
#[utoipa::path(
    delete,
    path = "/api/secretariats/{id}",
    tag = "secretariats",
    params(("id" = Uuid, Path, description = "Secretariat id")),
    responses(
        (status = 204, description = "Secretariat removed"),
        (status = 404, description = "Unknown secretariat"),
    ),
)]
pub async fn delete_secretariat(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .secretariats
        .delete(SecretariatId(id), &user.username)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
