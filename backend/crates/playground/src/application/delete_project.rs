//! Delete Project Use Case
//!
//! Deletes a project owned by the authenticated user.

use std::sync::Arc;

use auth::domain::entity::user::User;
use kernel::id::ProjectId;

use crate::domain::repository::ProjectRepository;
use crate::domain::services::ensure_owner;
use crate::error::{PlaygroundError, PlaygroundResult};

/// Delete project use case
pub struct DeleteProjectUseCase<R>
where
    R: ProjectRepository,
{
    project_repo: Arc<R>,
}

impl<R> DeleteProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: Arc<R>) -> Self {
        Self { project_repo }
    }

    pub async fn execute(&self, identity: &User, project_id: ProjectId) -> PlaygroundResult<()> {
        let project = self
            .project_repo
            .find_by_id(project_id)
            .await?
            .ok_or(PlaygroundError::ProjectNotFound)?;

        ensure_owner(&project, &identity.user_id)?;

        self.project_repo.delete(project_id).await?;

        tracing::info!(project_id = %project_id, "Project deleted");

        Ok(())
    }
}
