//! In-Memory Repository Implementation
//!
//! Backing store double for tests and lightweight embedding. Individual
//! operations are atomic under the store's own lock, matching the
//! single-document-atomicity contract the core expects from a real store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use auth::domain::value_object::user_id::UserId;
use kernel::id::ProjectId;
use uuid::Uuid;

use crate::domain::entities::Project;
use crate::domain::repository::ProjectRepository;
use crate::error::{PlaygroundError, PlaygroundResult};

/// In-memory project repository
#[derive(Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<HashMap<Uuid, Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> PlaygroundResult<std::sync::RwLockReadGuard<'_, HashMap<Uuid, Project>>> {
        self.state
            .read()
            .map_err(|_| PlaygroundError::Store("project store lock poisoned".to_string()))
    }

    fn write(&self) -> PlaygroundResult<std::sync::RwLockWriteGuard<'_, HashMap<Uuid, Project>>> {
        self.state
            .write()
            .map_err(|_| PlaygroundError::Store("project store lock poisoned".to_string()))
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, project: &Project) -> PlaygroundResult<()> {
        self.write()?
            .insert(project.id.into_uuid(), project.clone());
        Ok(())
    }

    async fn find_by_id(&self, project_id: ProjectId) -> PlaygroundResult<Option<Project>> {
        Ok(self.read()?.get(project_id.as_uuid()).cloned())
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> PlaygroundResult<Vec<Project>> {
        let mut projects: Vec<Project> = self
            .read()?
            .values()
            .filter(|p| p.owner_id == *owner_id)
            .cloned()
            .collect();
        // Stable creation order
        projects.sort_by_key(|p| p.created_at);
        Ok(projects)
    }

    async fn update_code(&self, project_id: ProjectId, code: &str) -> PlaygroundResult<()> {
        let mut state = self.write()?;
        match state.get_mut(project_id.as_uuid()) {
            Some(project) => {
                project.update_code(code.to_string());
                Ok(())
            }
            None => Err(PlaygroundError::ProjectNotFound),
        }
    }

    async fn update_name(&self, project_id: ProjectId, name: &str) -> PlaygroundResult<()> {
        let mut state = self.write()?;
        match state.get_mut(project_id.as_uuid()) {
            Some(project) => {
                project.rename(name.to_string());
                Ok(())
            }
            None => Err(PlaygroundError::ProjectNotFound),
        }
    }

    async fn delete(&self, project_id: ProjectId) -> PlaygroundResult<()> {
        match self.write()?.remove(project_id.as_uuid()) {
            Some(_) => Ok(()),
            None => Err(PlaygroundError::ProjectNotFound),
        }
    }
}
