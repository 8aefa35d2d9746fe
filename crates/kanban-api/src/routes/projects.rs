//! # Project Routes
//!
//! - `POST   /api/projects` — create
//! - `GET    /api/projects` — paged list
//! - `GET    /api/projects/{id}` — detail
//! - `PUT    /api/projects/{id}` — full update
//! - `POST   /api/projects/{id}/transition?target=` — lifecycle transition
//! - `DELETE /api/projects/{id}` — remove

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use kanban_core::ProjectId;

use crate::auth::AuthUser;
use crate::dto::{PageDto, ProjectRequest, ProjectResponse, TransitionParams};
use crate::error::ApiError;
use crate::extractors::PageParams;
use crate::state::AppState;

/// Assemble the project router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", post(create_project).get(list_projects))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/projects/{id}/transition", post(transition_project))
}

/// Create a project.
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = ProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<ProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.projects.create(request, &user.username).await?;
    let location = format!("/api/projects/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// One page of projects.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(PageParams),
    responses(
        (status = 200, description = "Page of projects", body = PageDto<ProjectResponse>),
        (status = 401, description = "Missing or invalid token"),
    ),
)]
pub async fn list_projects(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<PageParams>,
) -> Result<Json<PageDto<ProjectResponse>>, ApiError> {
    let page = state.projects.find_all(params.into(), &user.username).await?;
    Ok(Json(page))
}

/// Project detail.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "The project", body = ProjectResponse),
        (status = 404, description = "Unknown project"),
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state
        .projects
        .find_by_id(ProjectId(id), &user.username)
        .await?;
    Ok(Json(project))
}

/// Full update of a project.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Updated project", body = ProjectResponse),
        (status = 404, description = "Unknown project"),
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<ProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state
        .projects
        .update(ProjectId(id), request, &user.username)
        .await?;
    Ok(Json(project))
}

/// Request a lifecycle transition.
#[utoipa::path(
    post,
    path = "/api/projects/{id}/transition",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id"), TransitionParams),
    responses(
        (status = 200, description = "Project after the transition", body = ProjectResponse),
        (status = 400, description = "Transition rejected"),
        (status = 404, description = "Unknown project"),
    ),
)]
pub async fn transition_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Query(params): Query<TransitionParams>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state
        .projects
        .transition(ProjectId(id), params.target, &user.username)
        .await?;
    Ok(Json(project))
}

/// Remove a project.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project removed"),
        (status = 404, description = "Unknown project"),
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.projects.delete(ProjectId(id), &user.username).await?;
    Ok(StatusCode::NO_CONTENT)
}
