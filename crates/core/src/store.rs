//! Project storage.
//!
//! [`ProjectStore`] is the seam between the HTTP layer and wherever projects
//! live. [`InMemoryProjectStore`] is the only implementation: a `Vec` kept in
//! insertion order plus a monotonically increasing id counter, both behind a
//! single lock so every operation is atomic from the caller's perspective.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::project::{CreateProject, Project, UpdateProject};
use crate::types::ProjectId;

/// Convenience alias for store results. `Err` is reserved for backend
/// failures; expected conditions (unknown id) are `None` / `false`.
pub type StoreResult<T> = Result<T, CoreError>;

/// CRUD operations over the project collection.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects in insertion order, optionally only those whose
    /// `categoryId` equals `category`. Returns an owned snapshot.
    async fn list(&self, category: Option<&str>) -> StoreResult<Vec<Project>>;

    /// Find a project by id.
    async fn get(&self, id: ProjectId) -> StoreResult<Option<Project>>;

    /// Insert a new project under the next unused id.
    async fn create(&self, input: CreateProject) -> StoreResult<Project>;

    /// Apply a partial update. Returns `None` if no project has this id.
    async fn update(&self, id: ProjectId, input: UpdateProject) -> StoreResult<Option<Project>>;

    /// Remove a project. Returns `true` if a record was removed.
    async fn delete(&self, id: ProjectId) -> StoreResult<bool>;
}

#[derive(Debug)]
struct Collection {
    next_id: ProjectId,
    projects: Vec<Project>,
}

/// Process-local project store. Contents are lost on restart.
#[derive(Debug)]
pub struct InMemoryProjectStore {
    inner: RwLock<Collection>,
}

impl InMemoryProjectStore {
    /// Create an empty store whose first id will be `1`.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collection {
                next_id: 1,
                projects: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn list(&self, category: Option<&str>) -> StoreResult<Vec<Project>> {
        let collection = self.inner.read().await;
        let projects = match category {
            None => collection.projects.clone(),
            Some(category) => collection
                .projects
                .iter()
                .filter(|p| p.category_id == category)
                .cloned()
                .collect(),
        };
        Ok(projects)
    }

    async fn get(&self, id: ProjectId) -> StoreResult<Option<Project>> {
        let collection = self.inner.read().await;
        Ok(collection.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, input: CreateProject) -> StoreResult<Project> {
        let mut collection = self.inner.write().await;
        let id = collection.next_id;
        collection.next_id += 1;

        let project = Project::new(id, input);
        collection.projects.push(project.clone());
        tracing::debug!(id, "Project created");
        Ok(project)
    }

    async fn update(&self, id: ProjectId, input: UpdateProject) -> StoreResult<Option<Project>> {
        let mut collection = self.inner.write().await;
        let Some(slot) = collection.projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        let next = slot.with_update(input);
        *slot = next.clone();
        tracing::debug!(id, "Project updated");
        Ok(Some(next))
    }

    async fn delete(&self, id: ProjectId) -> StoreResult<bool> {
        let mut collection = self.inner.write().await;
        let Some(idx) = collection.projects.iter().position(|p| p.id == id) else {
            return Ok(false);
        };

        collection.projects.remove(idx);
        tracing::debug!(id, "Project deleted");
        Ok(true)
    }
}
