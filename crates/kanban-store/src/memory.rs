//! # In-Memory Repositories
//!
//! `RwLock<HashMap>`-backed implementations of the repository traits.
//! Paged reads materialize the map's values, order them by creation
//! instant (id as tie-breaker, so paging is stable when instants collide),
//! and cut the requested page.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use kanban_core::{
    Project, ProjectId, Responsible, ResponsibleId, Secretariat, SecretariatId,
};

use crate::page::{Page, PageRequest};
use crate::repository::{
    ProjectRepository, ResponsibleRepository, SecretariatRepository, StoreError,
};

/// In-memory project storage.
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    items: RwLock<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save(&self, mut project: Project) -> Result<Project, StoreError> {
        let mut items = self.items.write().await;
        let now = Utc::now();
        if let Some(existing) = items.get(&project.id) {
            project.created_at = existing.created_at;
        } else {
            project.created_at = now;
        }
        project.updated_at = now;
        items.insert(project.id, project.clone());
        Ok(project)
    }

    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, StoreError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Project>, StoreError> {
        let items = self.items.read().await;
        let mut all: Vec<Project> = items.values().cloned().collect();
        all.sort_by_key(|p| (p.created_at, p.id));
        Ok(Page::from_slice(&all, request))
    }

    async fn delete(&self, id: ProjectId) -> Result<bool, StoreError> {
        Ok(self.items.write().await.remove(&id).is_some())
    }
}

/// In-memory responsible storage.
#[derive(Debug, Default)]
pub struct InMemoryResponsibleRepository {
    items: RwLock<HashMap<ResponsibleId, Responsible>>,
}

impl InMemoryResponsibleRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResponsibleRepository for InMemoryResponsibleRepository {
    async fn save(&self, mut responsible: Responsible) -> Result<Responsible, StoreError> {
        let mut items = self.items.write().await;
        let now = Utc::now();
        if let Some(existing) = items.get(&responsible.id) {
            responsible.created_at = existing.created_at;
        } else {
            responsible.created_at = now;
        }
        responsible.updated_at = now;
        items.insert(responsible.id, responsible.clone());
        Ok(responsible)
    }

    async fn find_by_id(&self, id: ResponsibleId) -> Result<Option<Responsible>, StoreError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Responsible>, StoreError> {
        let items = self.items.read().await;
        let mut all: Vec<Responsible> = items.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self
            .items
            .read()
            .await
            .values()
            .any(|r| r.email.eq_ignore_ascii_case(email)))
    }

    async fn delete(&self, id: ResponsibleId) -> Result<bool, StoreError> {
        Ok(self.items.write().await.remove(&id).is_some())
    }
}

/// In-memory secretariat storage.
#[derive(Debug, Default)]
pub struct InMemorySecretariatRepository {
    items: RwLock<HashMap<SecretariatId, Secretariat>>,
}

impl InMemorySecretariatRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SecretariatRepository for InMemorySecretariatRepository {
    async fn save(&self, mut secretariat: Secretariat) -> Result<Secretariat, StoreError> {
        let mut items = self.items.write().await;
        let now = Utc::now();
        if let Some(existing) = items.get(&secretariat.id) {
            secretariat.created_at = existing.created_at;
        } else {
            secretariat.created_at = now;
        }
        secretariat.updated_at = now;
        items.insert(secretariat.id, secretariat.clone());
        Ok(secretariat)
    }

    async fn find_by_id(&self, id: SecretariatId) -> Result<Option<Secretariat>, StoreError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Secretariat>, StoreError> {
        let items = self.items.read().await;
        let mut all: Vec<Secretariat> = items.values().cloned().collect();
        all.sort_by_key(|s| (s.created_at, s.id));
        Ok(Page::from_slice(&all, request))
    }

    async fn delete(&self, id: SecretariatId) -> Result<bool, StoreError> {
        Ok(self.items.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- projects ----

    #[tokio::test]
    async fn test_save_stamps_audit_instants() {
        let repo = InMemoryProjectRepository::new();
        let saved = repo.save(Project::new("alpha")).await.unwrap();
        let reloaded = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(reloaded.created_at, saved.created_at);

        let again = repo.save(reloaded).await.unwrap();
        assert_eq!(again.created_at, saved.created_at);
        assert!(again.updated_at >= saved.updated_at);
    }

    #[tokio::test]
    async fn test_find_page_orders_by_creation() {
        let repo = InMemoryProjectRepository::new();
        for name in ["first", "second", "third"] {
            repo.save(Project::new(name)).await.unwrap();
        }
        let page = repo.find_page(PageRequest::new(0, 2)).await.unwrap();
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.content.len(), 2);

        let rest = repo.find_page(PageRequest::new(1, 2)).await.unwrap();
        assert_eq!(rest.content.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let repo = InMemoryProjectRepository::new();
        let saved = repo.save(Project::new("alpha")).await.unwrap();
        assert!(repo.delete(saved.id).await.unwrap());
        assert!(!repo.delete(saved.id).await.unwrap());
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
    }

    // ---- responsibles ----

    #[tokio::test]
    async fn test_exists_by_email_is_case_insensitive() {
        let repo = InMemoryResponsibleRepository::new();
        repo.save(Responsible::new("Ana", "ana@example.org", None))
            .await
            .unwrap();
        assert!(repo.exists_by_email("ana@example.org").await.unwrap());
        assert!(repo.exists_by_email("ANA@EXAMPLE.ORG").await.unwrap());
        assert!(!repo.exists_by_email("bia@example.org").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_orders_by_name() {
        let repo = InMemoryResponsibleRepository::new();
        for (name, email) in [("Carla", "c@x.org"), ("Ana", "a@x.org"), ("Bruno", "b@x.org")] {
            repo.save(Responsible::new(name, email, None)).await.unwrap();
        }
        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Ana", "Bruno", "Carla"]);
    }

    // ---- secretariats ----

    #[tokio::test]
    async fn test_secretariat_round_trip() {
        let repo = InMemorySecretariatRepository::new();
        let saved = repo
            .save(Secretariat::new("Public Works", Some("infrastructure".into())))
            .await
            .unwrap();
        let page = repo.find_page(PageRequest::default()).await.unwrap();
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content[0].id, saved.id);
    }
}
