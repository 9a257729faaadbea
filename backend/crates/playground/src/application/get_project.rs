//! Get Project Use Case
//!
//! Fetches a single project owned by the authenticated user.

use std::sync::Arc;

use auth::domain::entity::user::User;
use kernel::id::ProjectId;

use crate::domain::entities::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::services::ensure_owner;
use crate::error::{PlaygroundError, PlaygroundResult};

/// Get project use case
pub struct GetProjectUseCase<R>
where
    R: ProjectRepository,
{
    project_repo: Arc<R>,
}

impl<R> GetProjectUseCase<R>
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
    ) -> PlaygroundResult<Project> {
        let project = self
            .project_repo
            .find_by_id(project_id)
            .await?
            .ok_or(PlaygroundError::ProjectNotFound)?;

        ensure_owner(&project, &identity.user_id)?;

        Ok(project)
    }
}
