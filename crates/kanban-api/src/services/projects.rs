//! # Project Service
//!
//! CRUD, paging, and lifecycle operations over projects. Every write path
//! recalculates the derived fields before persisting and invalidates the
//! page cache; the stored record therefore always satisfies the
//! derived-fields invariant on its way into the repository.

use std::sync::Arc;

use metrics::counter;

use kanban_core::{Clock, Project, ProjectId, ProjectStatus, ResponsibleId};
use kanban_state::lifecycle;
use kanban_store::{PageRequest, ProjectRepository, ResponsibleRepository};

use crate::cache::ReadCache;
use crate::config::CacheConfig;
use crate::dto::{PageDto, ProjectRequest, ProjectResponse};
use crate::error::ApiError;

/// Application service for projects.
#[derive(Clone)]
pub struct ProjectService {
    projects: Arc<dyn ProjectRepository>,
    responsibles: Arc<dyn ResponsibleRepository>,
    clock: Arc<dyn Clock>,
    pages: ReadCache<PageDto<ProjectResponse>>,
}

impl ProjectService {
    /// Wire the service against its repositories and clock.
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        responsibles: Arc<dyn ResponsibleRepository>,
        clock: Arc<dyn Clock>,
        cache: &CacheConfig,
    ) -> Self {
        Self {
            projects,
            responsibles,
            clock,
            pages: ReadCache::new(cache),
        }
    }

    /// Create a project, derive its initial status, persist it.
    pub async fn create(
        &self,
        request: ProjectRequest,
        actor: &str,
    ) -> Result<ProjectResponse, ApiError> {
        tracing::info!(user = actor, name = ?request.name, "action=create.started");

        let name = required_name(&request)?;
        let mut project = Project::new(name);
        apply_request(&mut project, &request);
        self.assign_responsibles(&mut project, &request).await?;

        lifecycle::recalculate(&mut project, self.clock.today());
        let saved = self.projects.save(project).await?;
        self.pages.invalidate_all();
        counter!("kanban_projects_created_total").increment(1);

        tracing::info!(user = actor, id = %saved.id, "action=create.finished");
        Ok(ProjectResponse::from(saved))
    }

    /// Look up one project.
    pub async fn find_by_id(&self, id: ProjectId, actor: &str) -> Result<ProjectResponse, ApiError> {
        tracing::info!(user = actor, id = %id, "action=findById.started");
        let project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;
        tracing::info!(user = actor, id = %id, "action=findById.finished");
        Ok(ProjectResponse::from(project))
    }

    /// One page of projects, served from the read cache when possible.
    pub async fn find_all(
        &self,
        request: PageRequest,
        actor: &str,
    ) -> Result<PageDto<ProjectResponse>, ApiError> {
        tracing::info!(
            user = actor,
            page = request.page,
            size = request.size,
            "action=findAll.started"
        );

        let key = format!("{}:{}", request.page, request.size);
        if let Some(hit) = self.pages.get(&key).await {
            tracing::debug!(user = actor, key = %key, "page cache hit");
            return Ok(hit);
        }

        let page = self.projects.find_page(request).await?;
        let out = PageDto::from(page.map(ProjectResponse::from));
        self.pages.insert(key, out.clone()).await;

        tracing::info!(
            user = actor,
            total_elements = out.total_elements,
            total_pages = out.total_pages,
            "action=findAll.finished"
        );
        Ok(out)
    }

    /// Apply a full update, re-derive, persist.
    pub async fn update(
        &self,
        id: ProjectId,
        request: ProjectRequest,
        actor: &str,
    ) -> Result<ProjectResponse, ApiError> {
        tracing::info!(user = actor, id = %id, "action=update.started");

        let mut project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

        apply_request(&mut project, &request);
        if request.responsible_ids.is_some() {
            project.responsibles.clear();
            self.assign_responsibles(&mut project, &request).await?;
        }

        lifecycle::recalculate(&mut project, self.clock.today());
        let saved = self.projects.save(project).await?;
        self.pages.invalidate_all();

        tracing::info!(user = actor, id = %id, "action=update.finished");
        Ok(ProjectResponse::from(saved))
    }

    /// Remove a project.
    pub async fn delete(&self, id: ProjectId, actor: &str) -> Result<(), ApiError> {
        tracing::info!(user = actor, id = %id, "action=delete.started");
        if !self.projects.delete(id).await? {
            return Err(ApiError::NotFound("Project not found".to_string()));
        }
        self.pages.invalidate_all();
        tracing::info!(user = actor, id = %id, "action=delete.finished");
        Ok(())
    }

    /// Run the guarded lifecycle transition and persist the outcome.
    pub async fn transition(
        &self,
        id: ProjectId,
        target: ProjectStatus,
        actor: &str,
    ) -> Result<ProjectResponse, ApiError> {
        tracing::info!(user = actor, id = %id, target = %target, "action=transition.started");

        let mut project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

        lifecycle::transition(&mut project, target, self.clock.today())?;

        let saved = self.projects.save(project).await?;
        self.pages.invalidate_all();
        counter!("kanban_project_transitions_total", "target" => target.as_wire()).increment(1);

        tracing::info!(
            user = actor,
            id = %id,
            new_status = %saved.status,
            "action=transition.finished"
        );
        Ok(ProjectResponse::from(saved))
    }

    /// Resolve the requested responsible ids, skipping unknown ones.
    async fn assign_responsibles(
        &self,
        project: &mut Project,
        request: &ProjectRequest,
    ) -> Result<(), ApiError> {
        if let Some(ids) = &request.responsible_ids {
            for raw in ids {
                let id = ResponsibleId(*raw);
                if self.responsibles.find_by_id(id).await?.is_some() {
                    project.responsibles.insert(id);
                }
            }
        }
        Ok(())
    }
}

/// The name is mandatory when creating.
fn required_name(request: &ProjectRequest) -> Result<&str, ApiError> {
    request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::Validation("name is required".to_string()))
}

/// Overwrite the mutable fields from the request, as the original mapper
/// does: a present name replaces the stored one, dates are applied as
/// given including nulls.
fn apply_request(project: &mut Project, request: &ProjectRequest) {
    if let Some(name) = request.name.as_deref().map(str::trim) {
        if !name.is_empty() {
            project.name = name.to_string();
        }
    }
    project.planned_start = request.planned_start;
    project.planned_end = request.planned_end;
    project.actual_start = request.actual_start;
    project.actual_end = request.actual_end;
}
