//! Create Project Use Case
//!
//! Creates a project owned by the authenticated user.

use std::sync::Arc;

use auth::domain::entity::user::User;

use crate::domain::entities::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::services::starter_code;
use crate::domain::value_objects::Language;
use crate::error::PlaygroundResult;

/// Create project input
pub struct CreateProjectInput {
    pub name: String,
    pub language: String,
    /// Initial source code; when absent the starter template for the
    /// language is used
    pub code: Option<String>,
    /// Opaque, caller-supplied version tag
    pub version: String,
}

/// Create project output
pub struct CreateProjectOutput {
    pub project: Project,
}

/// Create project use case
pub struct CreateProjectUseCase<R>
where
    R: ProjectRepository,
{
    project_repo: Arc<R>,
}

impl<R> CreateProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: Arc<R>) -> Self {
        Self { project_repo }
    }

    /// Create a project for `identity`
    ///
    /// The owner is always the resolved identity; the caller has no way
    /// to create a project on someone else's behalf.
    pub async fn execute(
        &self,
        identity: &User,
        input: CreateProjectInput,
    ) -> PlaygroundResult<CreateProjectOutput> {
        let language = Language::new(input.language);
        let code = input
            .code
            .unwrap_or_else(|| starter_code(&language).to_string());

        let project = Project::new(input.name, language, code, input.version, identity.user_id);

        self.project_repo.create(&project).await?;

        tracing::info!(
            project_id = %project.id,
            owner_id = %project.owner_id,
            language = %project.language,
            "Project created"
        );

        Ok(CreateProjectOutput { project })
    }
}
