//! # Route Modules
//!
//! Each module defines an Axum router (or handlers) for one API surface
//! area; [`create_router`] assembles them into the application with the
//! shared middleware: request tracing, CORS, and bearer authentication on
//! the `/api` tree.

pub mod auth;
pub mod health;
pub mod projects;
pub mod responsibles;
pub mod secretariats;

use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::dto::{
    HealthResponse, LoginRequest, PageDto, ProjectRequest, ProjectResponse, ResponsibleRequest,
    ResponsibleResponse, SecretariatRequest, SecretariatResponse, TokenResponse,
};
use crate::state::AppState;

/// OpenAPI documentation for the whole surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        projects::create_project,
        projects::list_projects,
        projects::get_project,
        projects::update_project,
        projects::transition_project,
        projects::delete_project,
        responsibles::create_responsible,
        responsibles::list_responsibles,
        responsibles::get_responsible,
        responsibles::update_responsible,
        responsibles::delete_responsible,
        secretariats::create_secretariat,
        secretariats::list_secretariats,
        secretariats::get_secretariat,
        secretariats::update_secretariat,
        secretariats::delete_secretariat,
        health::health,
        health::metrics,
    ),
    components(schemas(
        ProjectRequest,
        ProjectResponse,
        PageDto<ProjectResponse>,
        ResponsibleRequest,
        ResponsibleResponse,
        SecretariatRequest,
        SecretariatResponse,
        PageDto<SecretariatResponse>,
        LoginRequest,
        TokenResponse,
        HealthResponse,
    )),
    tags(
        (name = "projects", description = "Project CRUD, paging, and lifecycle transitions"),
        (name = "responsibles", description = "People accountable for projects"),
        (name = "secretariats", description = "Organizational units"),
        (name = "auth", description = "Authentication and token issuance"),
        (name = "health", description = "Operational endpoints"),
    ),
    info(
        title = "Kanban Stack API",
        version = "0.1.0",
        description = "Project lifecycle tracking: date-driven status derivation, delay metrics, and guarded status transitions over a paged CRUD surface.",
    ),
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Assemble the full application router.
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(projects::router())
        .merge(responsibles::router())
        .merge(secretariats::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::authenticate,
        ));

    Router::new()
        .nest("/api", protected)
        .route("/auth/login", post(auth::login))
        .route("/health", get(health::health))
        .route("/metrics", get(health::metrics))
        .route("/api-docs/openapi.json", get(serve_openapi))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
