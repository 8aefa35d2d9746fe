//! # Error Types — Shared Domain Taxonomy
//!
//! The error taxonomy shared across the stack. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - `Business` is a recoverable rule violation, surfaced to callers as a
//!   4xx-equivalent condition with a human-readable message. Never retried
//!   automatically.
//! - `NotFound` is raised by lookup layers before domain logic runs; the
//!   lifecycle engine itself never raises it.
//! - `Validation` covers malformed input rejected at the edge.

use thiserror::Error;

/// Domain-level error for the kanban stack.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A business rule was violated.
    #[error("{0}")]
    Business(String),

    /// The referenced resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Input failed validation.
    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    /// Business-rule violation with the given message.
    pub fn business(msg: impl Into<String>) -> Self {
        Self::Business(msg.into())
    }

    /// Missing-resource error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
