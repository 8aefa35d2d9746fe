//! # Secretariat Service
//!
//! CRUD with paging over secretariats. Detail and page reads are cached;
//! every write drops both caches.

use std::sync::Arc;

use kanban_core::{Secretariat, SecretariatId};
use kanban_store::{PageRequest, SecretariatRepository};

use crate::cache::ReadCache;
use crate::config::CacheConfig;
use crate::dto::{PageDto, SecretariatRequest, SecretariatResponse};
use crate::error::ApiError;

/// Application service for secretariats.
#[derive(Clone)]
pub struct SecretariatService {
    secretariats: Arc<dyn SecretariatRepository>,
    details: ReadCache<SecretariatResponse>,
    pages: ReadCache<PageDto<SecretariatResponse>>,
}

impl SecretariatService {
    /// Wire the service against its repository.
    pub fn new(secretariats: Arc<dyn SecretariatRepository>, cache: &CacheConfig) -> Self {
        Self {
            secretariats,
            details: ReadCache::new(cache),
            pages: ReadCache::new(cache),
        }
    }

    /// Create a secretariat.
    pub async fn create(
        &self,
        request: SecretariatRequest,
        actor: &str,
    ) -> Result<SecretariatResponse, ApiError> {
        tracing::info!(user = actor, name = ?request.name, "action=create.started");

        let name = required_name(&request)?;
        let secretariat = Secretariat::new(name, request.description.clone());
        let saved = self.secretariats.save(secretariat).await?;
        self.invalidate();

        tracing::info!(user = actor, id = %saved.id, "action=create.finished");
        Ok(SecretariatResponse::from(saved))
    }

    /// Look up one secretariat, through the detail cache.
    pub async fn find_by_id(
        &self,
        id: SecretariatId,
        actor: &str,
    ) -> Result<SecretariatResponse, ApiError> {
        tracing::info!(user = actor, id = %id, "action=findById.started");

        let key = id.to_string();
        if let Some(hit) = self.details.get(&key).await {
            return Ok(hit);
        }

        let secretariat = self
            .secretariats
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Secretariat not found".to_string()))?;
        let out = SecretariatResponse::from(secretariat);
        self.details.insert(key, out.clone()).await;

        tracing::info!(user = actor, id = %id, "action=findById.finished");
        Ok(out)
    }

    /// One page of secretariats, through the page cache.
    pub async fn find_all(
        &self,
        request: PageRequest,
        actor: &str,
    ) -> Result<PageDto<SecretariatResponse>, ApiError> {
        tracing::info!(
            user = actor,
            page = request.page,
            size = request.size,
            "action=findAll.started"
        );

        let key = format!("{}:{}", request.page, request.size);
        if let Some(hit) = self.pages.get(&key).await {
            return Ok(hit);
        }

        let page = self.secretariats.find_page(request).await?;
        let out = PageDto::from(page.map(SecretariatResponse::from));
        self.pages.insert(key, out.clone()).await;

        tracing::info!(
            user = actor,
            total_elements = out.total_elements,
            "action=findAll.finished"
        );
        Ok(out)
    }

    /// Apply a full update.
    pub async fn update(
        &self,
        id: SecretariatId,
        request: SecretariatRequest,
        actor: &str,
    ) -> Result<SecretariatResponse, ApiError> {
        tracing::info!(user = actor, id = %id, "action=update.started");

        let mut secretariat = self
            .secretariats
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Secretariat not found".to_string()))?;

        secretariat.name = required_name(&request)?.to_string();
        secretariat.description = request.description.clone();

        let saved = self.secretariats.save(secretariat).await?;
        self.invalidate();

        tracing::info!(user = actor, id = %id, "action=update.finished");
        Ok(SecretariatResponse::from(saved))
    }

    /// Remove a secretariat.
    pub async fn delete(&self, id: SecretariatId, actor: &str) -> Result<(), ApiError> {
        tracing::info!(user = actor, id = %id, "action=delete.started");
        if !self.secretariats.delete(id).await? {
            return Err(ApiError::NotFound("Secretariat not found".to_string()));
        }
        self.invalidate();
        tracing::info!(user = actor, id = %id, "action=delete.finished");
        Ok(())
    }

    fn invalidate(&self) {
        self.details.invalidate_all();
        self.pages.invalidate_all();
    }
}

/// The name is mandatory.
fn required_name(request: &SecretariatRequest) -> Result<&str, ApiError> {
    request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation("name is required".to_string()))
}
