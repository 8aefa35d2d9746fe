//! # Request/Response DTOs
//!
//! The JSON contracts of the REST surface, kept separate from the domain
//! entities so storage shape and wire shape can drift independently.
//! Status fields serialize as the four fixed wire tokens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use kanban_core::{Project, ProjectStatus, Responsible, Secretariat};
use kanban_store::Page;

// ─── Projects ────────────────────────────────────────────────────────

/// Create/update payload for a project.
///
/// Dates are applied as given — explicit `null` clears a stored date.
/// Unknown responsible ids are skipped silently.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectRequest {
    /// Display name; required on create, optional on update.
    pub name: Option<String>,
    pub planned_start: Option<NaiveDate>,
    pub planned_end: Option<NaiveDate>,
    pub actual_start: Option<NaiveDate>,
    pub actual_end: Option<NaiveDate>,
    /// Replaces the full assignment set when present.
    pub responsible_ids: Option<Vec<Uuid>>,
}

/// A project as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub name: String,
    /// Lifecycle status wire token.
    #[schema(value_type = String, example = "EM_ANDAMENTO")]
    pub status: ProjectStatus,
    pub planned_start: Option<NaiveDate>,
    pub planned_end: Option<NaiveDate>,
    pub actual_start: Option<NaiveDate>,
    pub actual_end: Option<NaiveDate>,
    pub days_delay: i64,
    pub percent_time_remaining: f64,
    pub responsible_ids: Vec<Uuid>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.0,
            name: p.name,
            status: p.status,
            planned_start: p.planned_start,
            planned_end: p.planned_end,
            actual_start: p.actual_start,
            actual_end: p.actual_end,
            days_delay: p.days_delay,
            percent_time_remaining: p.percent_time_remaining,
            responsible_ids: p.responsibles.iter().map(|id| id.0).collect(),
        }
    }
}

/// `?target=` parameter of the transition endpoint.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct TransitionParams {
    /// Requested target status wire token.
    #[param(value_type = String, example = "CONCLUIDO")]
    pub target: ProjectStatus,
}

// ─── Responsibles ────────────────────────────────────────────────────

/// Create/update payload for a responsible.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ResponsibleRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub secretariat_id: Option<Uuid>,
}

/// A responsible as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResponsibleResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub secretariat_id: Option<Uuid>,
}

impl From<Responsible> for ResponsibleResponse {
    fn from(r: Responsible) -> Self {
        Self {
            id: r.id.0,
            name: r.name,
            email: r.email,
            role: r.role,
            secretariat_id: r.secretariat_id.map(|id| id.0),
        }
    }
}

// ─── Secretariats ────────────────────────────────────────────────────

/// Create/update payload for a secretariat.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SecretariatRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A secretariat as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SecretariatResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<Secretariat> for SecretariatResponse {
    fn from(s: Secretariat) -> Self {
        Self {
            id: s.id.0,
            name: s.name,
            description: s.description,
        }
    }
}

// ─── Paging envelope ─────────────────────────────────────────────────

/// One page of results plus totals, as serialized by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> From<Page<T>> for PageDto<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            content: page.content,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}

// ─── Auth ────────────────────────────────────────────────────────────

/// Login payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Issued token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

// ─── Health ──────────────────────────────────────────────────────────

/// Liveness probe body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"UP"` while the process answers.
    #[schema(example = "UP")]
    pub status: String,
}
