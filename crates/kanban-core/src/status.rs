//! # Project Status — Single Source of Truth
//!
//! Defines the `ProjectStatus` enum with the four lifecycle states.
//! This is the ONE definition used across the entire stack. Every `match`
//! on `ProjectStatus` must be exhaustive.
//!
//! ## Wire Compatibility
//!
//! The serialized spellings are fixed: `A_INICIAR`, `EM_ANDAMENTO`,
//! `ATRASADO`, `CONCLUIDO`. Existing callers persist and exchange these
//! exact tokens; the Rust variant names are free to be idiomatic English
//! but the wire form never changes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Lifecycle state of a project.
///
/// The canonical status is always derived from the project's planned and
/// actual dates (see `kanban-state`); the stored value is a cache of that
/// derivation.
///
/// | Variant | Wire token | Meaning |
/// |---|---|---|
/// | `NotStarted` | `A_INICIAR` | No work recorded, nothing overdue |
/// | `InProgress` | `EM_ANDAMENTO` | Actually started, not past planned end |
/// | `Delayed` | `ATRASADO` | A planned date passed without the actual one |
/// | `Completed` | `CONCLUIDO` | An actual end date is recorded |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Not started yet — the initial state of a new project.
    #[default]
    #[serde(rename = "A_INICIAR")]
    NotStarted,
    /// Work is underway.
    #[serde(rename = "EM_ANDAMENTO")]
    InProgress,
    /// Behind plan: a planned date elapsed without its actual counterpart.
    #[serde(rename = "ATRASADO")]
    Delayed,
    /// Finished (terminal from the transition table's perspective).
    #[serde(rename = "CONCLUIDO")]
    Completed,
}

impl ProjectStatus {
    /// The wire-level token for this status.
    pub const fn as_wire(&self) -> &'static str {
        match self {
            Self::NotStarted => "A_INICIAR",
            Self::InProgress => "EM_ANDAMENTO",
            Self::Delayed => "ATRASADO",
            Self::Completed => "CONCLUIDO",
        }
    }

    /// Whether this status has no outgoing rows in the transition table.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for ProjectStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A_INICIAR" => Ok(Self::NotStarted),
            "EM_ANDAMENTO" => Ok(Self::InProgress),
            "ATRASADO" => Ok(Self::Delayed),
            "CONCLUIDO" => Ok(Self::Completed),
            other => Err(DomainError::Validation(format!(
                "unknown project status: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tokens_are_stable() {
        assert_eq!(ProjectStatus::NotStarted.as_wire(), "A_INICIAR");
        assert_eq!(ProjectStatus::InProgress.as_wire(), "EM_ANDAMENTO");
        assert_eq!(ProjectStatus::Delayed.as_wire(), "ATRASADO");
        assert_eq!(ProjectStatus::Completed.as_wire(), "CONCLUIDO");
    }

    #[test]
    fn test_serde_uses_wire_tokens() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"EM_ANDAMENTO\"");
        let back: ProjectStatus = serde_json::from_str("\"ATRASADO\"").unwrap();
        assert_eq!(back, ProjectStatus::Delayed);
    }

    #[test]
    fn test_from_str_round_trip() {
        for status in [
            ProjectStatus::NotStarted,
            ProjectStatus::InProgress,
            ProjectStatus::Delayed,
            ProjectStatus::Completed,
        ] {
            assert_eq!(status.as_wire().parse::<ProjectStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("IN_PROGRESS".parse::<ProjectStatus>().is_err());
        assert!("".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_default_is_not_started() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::NotStarted);
    }

    #[test]
    fn test_only_completed_is_terminal() {
        assert!(ProjectStatus::Completed.is_terminal());
        assert!(!ProjectStatus::NotStarted.is_terminal());
        assert!(!ProjectStatus::InProgress.is_terminal());
        assert!(!ProjectStatus::Delayed.is_terminal());
    }
}
