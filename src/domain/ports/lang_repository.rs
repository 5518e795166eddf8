//! Language repository ports.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Lang, LangView};

/// Write-side repository for language persistence.
#[async_trait]
pub trait LangRepository: Send + Sync {
    async fn create(&self, lang: &Lang) -> DomainResult<()>;

    async fn update(&self, lang: &Lang) -> DomainResult<()>;

    /// Get a language by id and author, `DomainError::LangNotFound` when absent.
    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Lang>;

    async fn exist(&self, id: &str, author_id: &str) -> DomainResult<bool>;

    async fn exist_by_name(&self, name: &str, author_id: &str) -> DomainResult<bool>;

    async fn delete(&self, id: &str, author_id: &str) -> DomainResult<()>;

    /// Delete every language of the author, returning how many were removed.
    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize>;
}

/// Read-side repository providing language views.
#[async_trait]
pub trait LangViewRepository: Send + Sync {
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<LangView>;

    /// Get every language view of the author. No ordering is guaranteed.
    async fn get_all_views(&self, author_id: &str) -> DomainResult<Vec<LangView>>;
}
