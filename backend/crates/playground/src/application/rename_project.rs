//! Rename Project Use Case
//!
//! Renames a project owned by the authenticated user.

use std::sync::Arc;

use auth::domain::entity::user::User;
use kernel::id::ProjectId;

use crate::domain::repository::ProjectRepository;
use crate::domain::services::ensure_owner;
use crate::error::{PlaygroundError, PlaygroundResult};

/// Rename project use case
pub struct RenameProjectUseCase<R>
where
    R: ProjectRepository,
{
    project_repo: Arc<R>,
}

impl<R> RenameProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: Arc<R>) -> Self {
        Self { project_repo }
    }

    pub async fn execute(
        &self,
        identity: &User,
        project_id: ProjectId,
        new_name: String,
    ) -> PlaygroundResult<()> {
        let project = self
            .project_repo
            .find_by_id(project_id)
            .await?
            .ok_or(PlaygroundError::ProjectNotFound)?;

        ensure_owner(&project, &identity.user_id)?;

        self.project_repo.update_name(project_id, &new_name).await?;

        tracing::info!(project_id = %project_id, "Project renamed");

        Ok(())
    }
}
