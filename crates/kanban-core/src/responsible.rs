//! # Responsible Entity
//!
//! A person accountable for one or more projects, optionally attached to
//! a secretariat. Email addresses are unique across responsibles; the
//! uniqueness rule is enforced by the service layer against the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{ResponsibleId, SecretariatId};

/// A person who can be assigned to projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Responsible {
    /// Stable identifier.
    pub id: ResponsibleId,
    /// Full name.
    pub name: String,
    /// Contact email, unique across all responsibles.
    pub email: String,
    /// Free-form role description.
    pub role: Option<String>,
    /// Secretariat this person belongs to, if any.
    pub secretariat_id: Option<SecretariatId>,
    /// When the record was first stored.
    pub created_at: DateTime<Utc>,
    /// When the record was last stored.
    pub updated_at: DateTime<Utc>,
}

impl Responsible {
    /// Create a new responsible.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ResponsibleId::new(),
            name: name.into(),
            email: email.into(),
            role,
            secretariat_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}
