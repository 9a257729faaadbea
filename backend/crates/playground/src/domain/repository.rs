//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use auth::domain::value_object::user_id::UserId;
use kernel::id::ProjectId;

use crate::domain::entities::Project;
use crate::error::PlaygroundResult;

/// Project repository trait
///
/// Atomicity of individual creates, updates, and deletes is the store's
/// responsibility; a write rejected because of a concurrent conflict
/// surfaces as `Store`.
#[trait_variant::make(ProjectRepository: Send)]
pub trait LocalProjectRepository {
    /// Create a new project
    async fn create(&self, project: &Project) -> PlaygroundResult<()>;

    /// Find project by ID
    async fn find_by_id(&self, project_id: ProjectId) -> PlaygroundResult<Option<Project>>;

    /// Find all projects owned by a user
    async fn find_by_owner(&self, owner_id: &UserId) -> PlaygroundResult<Vec<Project>>;

    /// Replace a project's source code
    async fn update_code(&self, project_id: ProjectId, code: &str) -> PlaygroundResult<()>;

    /// Replace a project's name
    async fn update_name(&self, project_id: ProjectId, name: &str) -> PlaygroundResult<()>;

    /// Delete a project
    async fn delete(&self, project_id: ProjectId) -> PlaygroundResult<()>;
}
