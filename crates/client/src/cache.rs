//! Client-side cache of the last-fetched projects, keyed by id.
//!
//! Edit forms are pre-filled from here rather than from rendered output.

use catalog_core::project::Project;
use catalog_core::types::ProjectId;
use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct ProjectCache {
    projects: IndexMap<ProjectId, Project>,
}

impl ProjectCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole cache with a fresh fetch, keeping fetch order.
    pub fn replace_all(&mut self, projects: Vec<Project>) {
        self.projects = projects.into_iter().map(|p| (p.id, p)).collect();
    }

    /// Insert or refresh a single record in place.
    pub fn upsert(&mut self, project: Project) {
        self.projects.insert(project.id, project);
    }

    /// Drop a record, keeping the order of the rest.
    pub fn remove(&mut self, id: ProjectId) -> Option<Project> {
        self.projects.shift_remove(&id)
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// Records in fetch order.
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
