//! # Application State
//!
//! Shared state for the Axum application: the per-resource services, the
//! token service, the login credentials, and the Prometheus handle.
//!
//! Construction wires the in-memory repositories into the services; tests
//! use [`AppState::with_clock`] to pin "today" so lifecycle derivations
//! are deterministic.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use kanban_core::{Clock, SystemClock};
use kanban_store::{
    InMemoryProjectRepository, InMemoryResponsibleRepository, InMemorySecretariatRepository,
    ProjectRepository, ResponsibleRepository, SecretariatRepository,
};

use crate::auth::JwtService;
use crate::config::{AppConfig, AuthConfig};
use crate::services::{ProjectService, ResponsibleService, SecretariatService};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Project CRUD, paging, and lifecycle transitions.
    pub projects: ProjectService,
    /// Responsible CRUD.
    pub responsibles: ResponsibleService,
    /// Secretariat CRUD with cached reads.
    pub secretariats: SecretariatService,
    /// Token issue/validation.
    pub jwt: JwtService,
    /// Login credentials accepted by `/auth/login`.
    pub credentials: AuthConfig,
    /// Prometheus render handle; absent when no recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Production state: system clock, fresh in-memory stores.
    pub fn new(config: AppConfig, metrics: Option<PrometheusHandle>) -> Self {
        Self::with_clock(config, metrics, Arc::new(SystemClock))
    }

    /// State with an explicit clock, for deterministic tests.
    pub fn with_clock(
        config: AppConfig,
        metrics: Option<PrometheusHandle>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let project_repo: Arc<dyn ProjectRepository> = Arc::new(InMemoryProjectRepository::new());
        let responsible_repo: Arc<dyn ResponsibleRepository> =
            Arc::new(InMemoryResponsibleRepository::new());
        let secretariat_repo: Arc<dyn SecretariatRepository> =
            Arc::new(InMemorySecretariatRepository::new());

        let jwt = JwtService::new(config.auth.jwt_secret.clone(), config.auth.token_ttl_hours);

        Self {
            projects: ProjectService::new(
                project_repo,
                responsible_repo.clone(),
                clock,
                &config.cache,
            ),
            responsibles: ResponsibleService::new(responsible_repo, secretariat_repo.clone()),
            secretariats: SecretariatService::new(secretariat_repo, &config.cache),
            jwt,
            credentials: config.auth,
            metrics,
        }
    }
}
