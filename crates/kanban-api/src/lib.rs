//! # kanban-api — Axum REST Service
//!
//! The top-level service layer for the kanban stack, built on
//! Axum/Tower/Tokio. Exposes the project lifecycle over HTTP and wires the
//! collaborators around the engine: persistence, paging, caching,
//! authentication, and observability.
//!
//! ## Routes
//!
//! - `/auth/login` — credential login, returns a JWT (unauthenticated)
//! - `/api/projects/*` — project CRUD, paging, and the transition operation
//! - `/api/responsibles/*` — responsible CRUD
//! - `/api/secretariats/*` — secretariat CRUD with paging
//! - `/health` — liveness probe (unauthenticated)
//! - `/metrics` — Prometheus exposition (unauthenticated)
//! - `/api-docs/openapi.json` — OpenAPI 3.1 document (unauthenticated)
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → CorsLayer → (on `/api` only) bearer authentication
//!
//! ## Architecture
//!
//! Route handlers hold no business logic — they parse, delegate to the
//! services, and map results. The services own action logging, read
//! caching, metrics, and calls into the `kanban-state` engine. All errors
//! map to structured HTTP responses via [`ApiError`].

pub mod auth;
pub mod cache;
pub mod config;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod services;
pub mod state;

pub use crate::config::AppConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from the logging config.
///
/// `RUST_LOG` wins over the configured filter when set, so operators can
/// raise verbosity without touching configuration files.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter.clone()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
