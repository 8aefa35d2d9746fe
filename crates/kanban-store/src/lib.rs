//! # kanban-store — Persistence Layer
//!
//! Repository traits and in-memory implementations for the kanban stack,
//! plus the pagination types shared with the API layer.
//!
//! ## Design
//!
//! - Repositories are `async` trait objects so route handlers stay
//!   backend-agnostic; the in-memory maps are the only implementation in
//!   this workspace, and the seam is where a SQL backend would slot in.
//! - Audit instants (`created_at`/`updated_at`) are a persistence concern:
//!   `save` stamps them here, never in domain logic.
//! - Durability is explicitly out of scope — the store exists to resolve
//!   lookups and paging for the service layer, not to guarantee storage.

pub mod memory;
pub mod page;
pub mod repository;

pub use memory::{InMemoryProjectRepository, InMemoryResponsibleRepository, InMemorySecretariatRepository};
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use repository::{ProjectRepository, ResponsibleRepository, SecretariatRepository, StoreError};
