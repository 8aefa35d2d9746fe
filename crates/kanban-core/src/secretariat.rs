//! # Secretariat Entity
//!
//! An organizational unit that groups responsibles. The relationship is a
//! foreign id on [`crate::Responsible`]; the secretariat itself carries
//! only descriptive fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::SecretariatId;

/// An organizational unit responsibles belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Secretariat {
    /// Stable identifier.
    pub id: SecretariatId,
    /// Unit name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// When the record was first stored.
    pub created_at: DateTime<Utc>,
    /// When the record was last stored.
    pub updated_at: DateTime<Utc>,
}

impl Secretariat {
    /// Create a new secretariat.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: SecretariatId::new(),
            name: name.into(),
            description,
            created_at: now,
            updated_at: now,
        }
    }
}
