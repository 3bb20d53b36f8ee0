//! The injectable store contract consumed by the workspace and form.

use async_trait::async_trait;

use canvass_core::entities::{ResearchDraft, ResearchEntry};

use crate::error::StoreError;

/// The four operations the research workspace needs from its persistence
/// collaborator. Dyn-safe so the form and workspace can be handed a
/// substitute store in tests.
#[async_trait]
pub trait ResearchStore: Send + Sync {
    /// All research entries for a project, newest `created_at` first.
    async fn list(&self, project_id: &str) -> Result<Vec<ResearchEntry>, StoreError>;

    /// Create an entry from a draft. The store assigns `id` and `created_at`.
    async fn insert(&self, draft: &ResearchDraft) -> Result<ResearchEntry, StoreError>;

    /// Replace the editable fields of an existing entry with the draft.
    async fn update(&self, id: &str, draft: &ResearchDraft) -> Result<(), StoreError>;

    /// Delete an entry by id.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
