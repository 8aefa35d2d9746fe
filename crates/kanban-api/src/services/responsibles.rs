//! # Responsible Service
//!
//! CRUD over responsibles. Enforces the unique-email rule against the
//! store and resolves secretariat references before persisting.

use std::sync::Arc;

use kanban_core::{Responsible, ResponsibleId, SecretariatId};
use kanban_store::{ResponsibleRepository, SecretariatRepository};

use crate::dto::{ResponsibleRequest, ResponsibleResponse};
use crate::error::ApiError;

/// Application service for responsibles.
#[derive(Clone)]
pub struct ResponsibleService {
    responsibles: Arc<dyn ResponsibleRepository>,
    secretariats: Arc<dyn SecretariatRepository>,
}

impl ResponsibleService {
    /// Wire the service against its repositories.
    pub fn new(
        responsibles: Arc<dyn ResponsibleRepository>,
        secretariats: Arc<dyn SecretariatRepository>,
    ) -> Self {
        Self {
            responsibles,
            secretariats,
        }
    }

    /// Create a responsible; duplicate emails are a business error.
    pub async fn create(
        &self,
        request: ResponsibleRequest,
        actor: &str,
    ) -> Result<ResponsibleResponse, ApiError> {
        tracing::info!(user = actor, email = ?request.email, "action=create.started");

        let (name, email) = required_fields(&request)?;
        if self.responsibles.exists_by_email(email).await? {
            return Err(ApiError::Business("email already registered".to_string()));
        }

        let mut responsible = Responsible::new(name, email, request.role.clone());
        responsible.secretariat_id = self.resolve_secretariat(&request).await?;

        let saved = self.responsibles.save(responsible).await?;
        tracing::info!(user = actor, id = %saved.id, "action=create.finished");
        Ok(ResponsibleResponse::from(saved))
    }

    /// All responsibles, ordered by name.
    pub async fn find_all(&self, actor: &str) -> Result<Vec<ResponsibleResponse>, ApiError> {
        tracing::info!(user = actor, "action=findAll.started");
        let all = self.responsibles.find_all().await?;
        tracing::info!(user = actor, count = all.len(), "action=findAll.finished");
        Ok(all.into_iter().map(ResponsibleResponse::from).collect())
    }

    /// Look up one responsible.
    pub async fn find_by_id(
        &self,
        id: ResponsibleId,
        actor: &str,
    ) -> Result<ResponsibleResponse, ApiError> {
        tracing::info!(user = actor, id = %id, "action=findById.started");
        let responsible = self
            .responsibles
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Responsible not found".to_string()))?;
        tracing::info!(user = actor, id = %id, "action=findById.finished");
        Ok(ResponsibleResponse::from(responsible))
    }

    /// Apply a full update; changing to an email already in use is a
    /// business error.
    pub async fn update(
        &self,
        id: ResponsibleId,
        request: ResponsibleRequest,
        actor: &str,
    ) -> Result<ResponsibleResponse, ApiError> {
        tracing::info!(user = actor, id = %id, "action=update.started");

        let mut responsible = self
            .responsibles
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Responsible not found".to_string()))?;

        let (name, email) = required_fields(&request)?;
        let email_changed = !responsible.email.eq_ignore_ascii_case(email);
        if email_changed && self.responsibles.exists_by_email(email).await? {
            return Err(ApiError::Business("email already registered".to_string()));
        }

        responsible.name = name.to_string();
        responsible.email = email.to_string();
        responsible.role = request.role.clone();
        responsible.secretariat_id = self.resolve_secretariat(&request).await?;

        let saved = self.responsibles.save(responsible).await?;
        tracing::info!(user = actor, id = %id, "action=update.finished");
        Ok(ResponsibleResponse::from(saved))
    }

    /// Remove a responsible.
    pub async fn delete(&self, id: ResponsibleId, actor: &str) -> Result<(), ApiError> {
        tracing::info!(user = actor, id = %id, "action=delete.started");
        if !self.responsibles.delete(id).await? {
            return Err(ApiError::NotFound("Responsible not found".to_string()));
        }
        tracing::info!(user = actor, id = %id, "action=delete.finished");
        Ok(())
    }

    /// A referenced secretariat must exist; no reference clears the link.
    async fn resolve_secretariat(
        &self,
        request: &ResponsibleRequest,
    ) -> Result<Option<SecretariatId>, ApiError> {
        match request.secretariat_id {
            Some(raw) => {
                let id = SecretariatId(raw);
                self.secretariats
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApiError::NotFound("Secretariat not found".to_string()))?;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }
}

/// Name and email are mandatory on create and update.
fn required_fields(request: &ResponsibleRequest) -> Result<(&str, &str), ApiError> {
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation("name is required".to_string()))?;
    let email = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation("email is required".to_string()))?;
    Ok((name, email))
}
