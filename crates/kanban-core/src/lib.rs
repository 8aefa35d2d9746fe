//! # kanban-core — Foundational Types for the Kanban Stack
//!
//! This crate is the bedrock of the kanban stack. It defines the domain
//! entities and type-system primitives every other crate builds on.
//! Every other crate in the workspace depends on `kanban-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `ProjectId`,
//!    `ResponsibleId`, `SecretariatId` — all UUID newtypes. No bare UUIDs
//!    crossing module boundaries, no cross-namespace identifier confusion.
//!
//! 2. **Single `ProjectStatus` enum.** One definition, four variants,
//!    exhaustive `match` everywhere. The wire spellings (`A_INICIAR`,
//!    `EM_ANDAMENTO`, `ATRASADO`, `CONCLUIDO`) are fixed for compatibility
//!    with existing callers and never change with the Rust variant names.
//!
//! 3. **Injected time.** Anything that needs "today" takes it through the
//!    [`Clock`] trait — production code uses [`SystemClock`], tests pin a
//!    [`FixedClock`]. No direct system-clock reads inside domain logic.
//!
//! 4. **Entities are plain mutable records.** The lifecycle engine in
//!    `kanban-state` mutates a [`Project`] in place; persistence in
//!    `kanban-store` owns creation and storage. This crate takes no
//!    position on either.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `kanban-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod project;
pub mod responsible;
pub mod secretariat;
pub mod status;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::DomainError;
pub use identity::{ProjectId, ResponsibleId, SecretariatId};
pub use project::Project;
pub use responsible::Responsible;
pub use secretariat::Secretariat;
pub use status::ProjectStatus;
pub use temporal::{Clock, FixedClock, SystemClock};
