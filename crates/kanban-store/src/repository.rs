//! # Repository Traits
//!
//! The lookup/storage seams consumed by the service layer. `save` has
//! upsert semantics and owns the audit instants: `created_at` is stamped
//! on first insert, `updated_at` on every store.

use async_trait::async_trait;
use thiserror::Error;

use kanban_core::{
    Project, ProjectId, Responsible, ResponsibleId, Secretariat, SecretariatId,
};

use crate::page::{Page, PageRequest};

/// Failure of the storage backend itself.
///
/// The in-memory implementations never produce one; the variant exists so
/// alternate backends can surface connectivity problems through the same
/// seam.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not be reached or answered abnormally.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Storage for projects, paged.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Insert or replace, stamping audit instants.
    async fn save(&self, project: Project) -> Result<Project, StoreError>;

    /// Look up one project.
    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, StoreError>;

    /// One page of projects, ordered by creation instant.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Project>, StoreError>;

    /// Remove a project. Returns whether it existed.
    async fn delete(&self, id: ProjectId) -> Result<bool, StoreError>;
}

/// Storage for responsibles.
#[async_trait]
pub trait ResponsibleRepository: Send + Sync {
    /// Insert or replace, stamping audit instants.
    async fn save(&self, responsible: Responsible) -> Result<Responsible, StoreError>;

    /// Look up one responsible.
    async fn find_by_id(&self, id: ResponsibleId) -> Result<Option<Responsible>, StoreError>;

    /// All responsibles, ordered by name.
    async fn find_all(&self) -> Result<Vec<Responsible>, StoreError>;

    /// Whether any responsible already uses this email.
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;

    /// Remove a responsible. Returns whether it existed.
    async fn delete(&self, id: ResponsibleId) -> Result<bool, StoreError>;
}

/// Storage for secretariats, paged.
#[async_trait]
pub trait SecretariatRepository: Send + Sync {
    /// Insert or replace, stamping audit instants.
    async fn save(&self, secretariat: Secretariat) -> Result<Secretariat, StoreError>;

    /// Look up one secretariat.
    async fn find_by_id(&self, id: SecretariatId) -> Result<Option<Secretariat>, StoreError>;

    /// One page of secretariats, ordered by creation instant.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Secretariat>, StoreError>;

    /// Remove a secretariat. Returns whether it existed.
    async fn delete(&self, id: SecretariatId) -> Result<bool, StoreError>;
}
