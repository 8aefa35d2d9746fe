//! # kanban-state — Project Lifecycle Engine
//!
//! Implements the date-driven lifecycle of a project: deriving the
//! canonical status and schedule metrics from planned/actual dates, and
//! validating explicit status transitions.
//!
//! ## Entry Points
//!
//! - [`recalculate`] — recompute `days_delay`, `percent_time_remaining`,
//!   and `status` from the raw dates. Idempotent, total, no transition
//!   semantics.
//! - [`transition`] — validate a requested status change against the
//!   freshly recomputed current status, apply at most one date mutation,
//!   then recalculate.
//!
//! ## State Machine
//!
//! ```text
//!                    ┌────────────▶ DELAYED ◀──────────┐
//!                    │  (date-driven, via recalculate) │
//! NOT_STARTED ──▶ IN_PROGRESS ──────────────────────▶ COMPLETED
//!      ▲              │                                (terminal)
//!      └──────────────┘
//!       (clear actual start)
//! ```
//!
//! `DELAYED` is normally reached organically when a planned date elapses
//! without its actual counterpart; the only explicit transition into it is
//! the guarded `NOT_STARTED → DELAYED` case. Every target of `COMPLETED`
//! is accepted regardless of the current status.
//!
//! ## Design
//!
//! The engine is a set of pure functions over a mutable [`Project`] plus
//! an explicit `today` — no I/O, no shared state, no clock reads. Callers
//! own fetching the record, choosing `today` (see `kanban_core::Clock`),
//! and persisting the result. It is safe to run concurrently on
//! independent records.

pub mod lifecycle;

pub use lifecycle::{recalculate, transition, TransitionError};

// Re-exported so engine callers get the record and status types without a
// separate kanban-core import.
pub use kanban_core::{Project, ProjectStatus};
