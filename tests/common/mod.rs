//! Common test utilities for integration tests
//!
//! Store wrappers around the in-memory repositories that count view reads
//! or pause them, so tests can observe what reaches the store.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use vocabd::adapters::memory::{MemoryLangRepository, MemoryTagRepository, MemoryTranslationRepository};
use vocabd::{
    DomainResult, LangViewRepository, LastTranslationViews, RandomViews, Tag, TagRepository, TagView,
    TagViewRepository, Translation, TranslationRepository, TranslationView, TranslationViewRepository,
};

pub const AUTHOR: &str = "author1";

/// Tag store counting view-side reads.
#[derive(Default)]
pub struct CountingTagStore {
    inner: MemoryTagRepository,
    reads: AtomicUsize,
}

impl CountingTagStore {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TagRepository for CountingTagStore {
    async fn create(&self, tag: &Tag) -> DomainResult<()> {
        self.inner.create(tag).await
    }

    async fn update(&self, tag: &Tag) -> DomainResult<()> {
        self.inner.update(tag).await
    }

    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Tag> {
        self.inner.get(id, author_id).await
    }

    async fn exist_by_name(&self, name: &str, author_id: &str) -> DomainResult<bool> {
        self.inner.exist_by_name(name, author_id).await
    }

    async fn delete(&self, id: &str, author_id: &str) -> DomainResult<()> {
        self.inner.delete(id, author_id).await
    }

    async fn all_exist(&self, ids: &[String], author_id: &str) -> DomainResult<bool> {
        self.inner.all_exist(ids, author_id).await
    }

    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize> {
        self.inner.delete_by_author_id(author_id).await
    }
}

#[async_trait]
impl TagViewRepository for CountingTagStore {
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<TagView> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_view(id, author_id).await
    }

    async fn get_views(&self, ids: &[String], author_id: &str) -> DomainResult<Vec<TagView>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_views(ids, author_id).await
    }

    async fn get_all_views(&self, author_id: &str) -> DomainResult<Vec<TagView>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_all_views(author_id).await
    }
}

/// Tag store whose next full-author read pauses after taking its snapshot
/// until released.
#[derive(Default)]
pub struct GatedTagStore {
    inner: MemoryTagRepository,
    armed: AtomicBool,
    /// Signalled once the paused read has its snapshot.
    pub entered: Notify,
    /// Lets the paused read return.
    pub release: Notify,
}

impl GatedTagStore {
    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl TagRepository for GatedTagStore {
    async fn create(&self, tag: &Tag) -> DomainResult<()> {
        self.inner.create(tag).await
    }

    async fn update(&self, tag: &Tag) -> DomainResult<()> {
        self.inner.update(tag).await
    }

    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Tag> {
        self.inner.get(id, author_id).await
    }

    async fn exist_by_name(&self, name: &str, author_id: &str) -> DomainResult<bool> {
        self.inner.exist_by_name(name, author_id).await
    }

    async fn delete(&self, id: &str, author_id: &str) -> DomainResult<()> {
        self.inner.delete(id, author_id).await
    }

    async fn all_exist(&self, ids: &[String], author_id: &str) -> DomainResult<bool> {
        self.inner.all_exist(ids, author_id).await
    }

    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize> {
        self.inner.delete_by_author_id(author_id).await
    }
}

#[async_trait]
impl TagViewRepository for GatedTagStore {
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<TagView> {
        self.inner.get_view(id, author_id).await
    }

    async fn get_views(&self, ids: &[String], author_id: &str) -> DomainResult<Vec<TagView>> {
        self.inner.get_views(ids, author_id).await
    }

    async fn get_all_views(&self, author_id: &str) -> DomainResult<Vec<TagView>> {
        let views = self.inner.get_all_views(author_id).await?;
        if self.armed.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        Ok(views)
    }
}

/// Translation store counting view-side reads.
pub struct CountingTranslationStore {
    inner: MemoryTranslationRepository,
    reads: AtomicUsize,
}

impl CountingTranslationStore {
    pub fn new(tags: Arc<dyn TagViewRepository>, langs: Arc<dyn LangViewRepository>) -> Self {
        Self {
            inner: MemoryTranslationRepository::new(tags, langs),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationRepository for CountingTranslationStore {
    async fn create(&self, translation: &Translation) -> DomainResult<()> {
        self.inner.create(translation).await
    }

    async fn update(&self, translation: &Translation) -> DomainResult<()> {
        self.inner.update(translation).await
    }

    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Translation> {
        self.inner.get(id, author_id).await
    }

    async fn exist_by_source(&self, source: &str, author_id: &str, lang_id: &str) -> DomainResult<bool> {
        self.inner.exist_by_source(source, author_id, lang_id).await
    }

    async fn exist_by_tag(&self, tag_id: &str, author_id: &str) -> DomainResult<bool> {
        self.inner.exist_by_tag(tag_id, author_id).await
    }

    async fn exist_by_lang(&self, lang_id: &str, author_id: &str) -> DomainResult<bool> {
        self.inner.exist_by_lang(lang_id, author_id).await
    }

    async fn delete(&self, id: &str, author_id: &str) -> DomainResult<()> {
        self.inner.delete(id, author_id).await
    }

    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize> {
        self.inner.delete_by_author_id(author_id).await
    }
}

#[async_trait]
impl TranslationViewRepository for CountingTranslationStore {
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<TranslationView> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_view(id, author_id).await
    }

    async fn get_last_views(
        &self,
        author_id: &str,
        lang_id: &str,
        page_size: usize,
        page: usize,
        tag_ids: &[String],
    ) -> DomainResult<LastTranslationViews> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner
            .get_last_views(author_id, lang_id, page_size, page, tag_ids)
            .await
    }

    async fn get_last_views_by_source_part(
        &self,
        author_id: &str,
        lang_id: &str,
        source_part: &str,
        page_size: usize,
        page: usize,
    ) -> DomainResult<LastTranslationViews> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner
            .get_last_views_by_source_part(author_id, lang_id, source_part, page_size, page)
            .await
    }

    async fn get_last_views_by_target_part(
        &self,
        author_id: &str,
        lang_id: &str,
        target_part: &str,
        page_size: usize,
        page: usize,
    ) -> DomainResult<LastTranslationViews> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner
            .get_last_views_by_target_part(author_id, lang_id, target_part, page_size, page)
            .await
    }

    async fn get_random_views(
        &self,
        author_id: &str,
        lang_id: &str,
        tag_ids: &[String],
        limit: usize,
    ) -> DomainResult<RandomViews> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner
            .get_random_views(author_id, lang_id, tag_ids, limit)
            .await
    }
}

/// Plain language store shared by the translation fixtures.
pub fn lang_store() -> Arc<MemoryLangRepository> {
    Arc::new(MemoryLangRepository::new())
}
