//! Translation repository ports.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{LastTranslationViews, RandomViews, Translation, TranslationView};

/// Write-side repository for translation persistence.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    async fn create(&self, translation: &Translation) -> DomainResult<()>;

    async fn update(&self, translation: &Translation) -> DomainResult<()>;

    /// Get a translation by id and author, `DomainError::TranslationNotFound` when absent.
    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Translation>;

    /// Check whether the author already translated `source` for this language.
    async fn exist_by_source(&self, source: &str, author_id: &str, lang_id: &str) -> DomainResult<bool>;

    /// Check whether at least one translation is tagged with `tag_id`.
    async fn exist_by_tag(&self, tag_id: &str, author_id: &str) -> DomainResult<bool>;

    /// Check whether at least one translation uses `lang_id`.
    async fn exist_by_lang(&self, lang_id: &str, author_id: &str) -> DomainResult<bool>;

    async fn delete(&self, id: &str, author_id: &str) -> DomainResult<()>;

    /// Delete every translation of the author, returning how many were removed.
    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize>;
}

/// Read-side repository providing translation views and listings.
#[async_trait]
pub trait TranslationViewRepository: Send + Sync {
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<TranslationView>;

    /// Newest-first page of translations carrying all of `tag_ids`.
    async fn get_last_views(
        &self,
        author_id: &str,
        lang_id: &str,
        page_size: usize,
        page: usize,
        tag_ids: &[String],
    ) -> DomainResult<LastTranslationViews>;

    /// Newest-first page of translations whose source contains `source_part`.
    async fn get_last_views_by_source_part(
        &self,
        author_id: &str,
        lang_id: &str,
        source_part: &str,
        page_size: usize,
        page: usize,
    ) -> DomainResult<LastTranslationViews>;

    /// Newest-first page of translations whose target contains `target_part`.
    async fn get_last_views_by_target_part(
        &self,
        author_id: &str,
        lang_id: &str,
        target_part: &str,
        page_size: usize,
        page: usize,
    ) -> DomainResult<LastTranslationViews>;

    /// Random sample of at most `limit` translations carrying all of `tag_ids`.
    async fn get_random_views(
        &self,
        author_id: &str,
        lang_id: &str,
        tag_ids: &[String],
        limit: usize,
    ) -> DomainResult<RandomViews>;
}
