//! # Project Entity
//!
//! The central record of the stack: a project with planned and actual
//! start/end dates, a derived lifecycle status, and derived schedule
//! metrics.
//!
//! ## Invariants
//!
//! - `days_delay` and `percent_time_remaining` are caches of the last
//!   recalculation, not independent facts. They are always overwritten by
//!   `kanban_state::recalculate` and never authoritative on their own.
//! - `status` always equals what the date-driven derivation would produce,
//!   except transiently inside a transition, where date mutation happens
//!   before the final recalculation.
//! - No ordering is enforced between `planned_start`/`planned_end` or
//!   `actual_start`/`actual_end`. Callers may store inconsistent dates;
//!   derivation still terminates with a deterministic result.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::identity::{ProjectId, ResponsibleId};
use crate::status::ProjectStatus;

/// A tracked project.
///
/// Constructed by the persistence layer and mutated in place by the
/// lifecycle engine; only the derived fields, the status, and (during a
/// transition) the two actual dates are engine-written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// Cached lifecycle status, kept consistent by recalculation.
    pub status: ProjectStatus,
    /// Scheduled start date.
    pub planned_start: Option<NaiveDate>,
    /// Scheduled end date.
    pub planned_end: Option<NaiveDate>,
    /// Observed real-world start date.
    pub actual_start: Option<NaiveDate>,
    /// Observed real-world end date.
    pub actual_end: Option<NaiveDate>,
    /// Whole days the project is past its planned end. Non-negative; derived.
    pub days_delay: i64,
    /// Share of the planned window still ahead, in `[0.0, 100.0]`. Derived.
    pub percent_time_remaining: f64,
    /// Responsibles assigned to this project, as opaque foreign references.
    pub responsibles: BTreeSet<ResponsibleId>,
    /// When the record was first stored.
    pub created_at: DateTime<Utc>,
    /// When the record was last stored.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with no dates recorded.
    ///
    /// A fresh project is `NOT_STARTED` with zeroed metrics, which is also
    /// exactly what the first recalculation derives for an all-null
    /// snapshot.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            name: name.into(),
            status: ProjectStatus::NotStarted,
            planned_start: None,
            planned_end: None,
            actual_start: None,
            actual_end: None,
            days_delay: 0,
            percent_time_remaining: 0.0,
            responsibles: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_is_not_started_with_zeroed_metrics() {
        let p = Project::new("bridge repair");
        assert_eq!(p.status, ProjectStatus::NotStarted);
        assert_eq!(p.days_delay, 0);
        assert_eq!(p.percent_time_remaining, 0.0);
        assert!(p.planned_start.is_none());
        assert!(p.planned_end.is_none());
        assert!(p.actual_start.is_none());
        assert!(p.actual_end.is_none());
        assert!(p.responsibles.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut p = Project::new("road paving");
        p.planned_start = NaiveDate::from_ymd_opt(2025, 3, 1);
        p.responsibles.insert(ResponsibleId::new());
        let json = serde_json::to_string(&p).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
