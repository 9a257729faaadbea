//! List Projects Use Case
//!
//! Lists the projects owned by the authenticated user. Never anyone
//! else's: the owner filter is applied in the store query, not client-side.

use std::sync::Arc;

use auth::domain::entity::user::User;

use crate::domain::entities::Project;
use crate::domain::repository::ProjectRepository;
use crate::error::PlaygroundResult;

/// List projects use case
pub struct ListProjectsUseCase<R>
where
    R: ProjectRepository,
{
    project_repo: Arc<R>,
}

impl<R> ListProjectsUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: Arc<R>) -> Self {
        Self { project_repo }
    }

    pub async fn execute(&self, identity: &User) -> PlaygroundResult<Vec<Project>> {
        self.project_repo.find_by_owner(&identity.user_id).await
    }
}
