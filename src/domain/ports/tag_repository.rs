//! Tag repository ports.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Tag, TagView};

/// Write-side repository for tag persistence.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Persist a new tag.
    async fn create(&self, tag: &Tag) -> DomainResult<()>;

    /// Save changes of an existing tag.
    async fn update(&self, tag: &Tag) -> DomainResult<()>;

    /// Get a tag by id and author, `DomainError::TagNotFound` when absent.
    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Tag>;

    /// Check whether the author already has a tag with this name.
    async fn exist_by_name(&self, name: &str, author_id: &str) -> DomainResult<bool>;

    /// Delete a tag.
    async fn delete(&self, id: &str, author_id: &str) -> DomainResult<()>;

    /// Check that every id belongs to an existing tag of the author.
    async fn all_exist(&self, ids: &[String], author_id: &str) -> DomainResult<bool>;

    /// Delete every tag of the author, returning how many were removed.
    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize>;
}

/// Read-side repository providing tag views.
#[async_trait]
pub trait TagViewRepository: Send + Sync {
    /// Get one tag view.
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<TagView>;

    /// Get the views for a batch of ids. Ids that do not exist are skipped.
    async fn get_views(&self, ids: &[String], author_id: &str) -> DomainResult<Vec<TagView>>;

    /// Get every tag view of the author. No ordering is guaranteed.
    async fn get_all_views(&self, author_id: &str) -> DomainResult<Vec<TagView>>;
}
