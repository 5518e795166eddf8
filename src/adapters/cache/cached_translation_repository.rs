//! Cached wrapper for the translation repositories.
//!
//! Three caches sit in front of the store:
//! - single records keyed by `(author, id)`
//! - tag-filtered listing pages, grouped per `(author, lang)`
//! - text-search listing pages, grouped the same way with their own TTL
//!
//! A write drops the whole `(author, lang)` group of both listing caches,
//! since a new or changed translation shifts every page.

use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::keys::{ListingKey, PageKey, RecordKey};
use super::ttl_cache::TtlCache;
use crate::domain::errors::DomainResult;
use crate::domain::models::{LastTranslationViews, RandomViews, Translation, TranslationView};
use crate::domain::ports::{TranslationRepository, TranslationViewRepository};

type Pages = Arc<RwLock<HashMap<PageKey, LastTranslationViews>>>;

/// Paged listing map: `(author, lang)` -> page key -> page.
struct ListingCache {
    pages: TtlCache<ListingKey, Pages>,
    ttl: Duration,
}

impl ListingCache {
    fn new(pages: TtlCache<ListingKey, Pages>, ttl: Duration) -> Self {
        Self { pages, ttl }
    }

    /// Serve `page` from the cache or fetch it. A fetched page joins the
    /// existing group when there is one, otherwise it starts a new group
    /// with a fresh TTL. Fetch errors leave the cache untouched.
    async fn get_or_fetch<F, Fut>(
        &self,
        listing: ListingKey,
        page: PageKey,
        fetch: F,
    ) -> DomainResult<LastTranslationViews>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = DomainResult<LastTranslationViews>> + Send,
    {
        let group = self.pages.get(&listing).await;

        if let Some(pages) = &group {
            let hit = pages.read().await.get(&page).cloned();
            if let Some(views) = hit {
                debug!(
                    author_id = listing.author_id.as_str(),
                    lang_id = listing.lang_id.as_str(),
                    "listing cache hit"
                );
                return Ok(views);
            }
        }

        let views = fetch().await?;

        match group {
            Some(pages) => {
                pages.write().await.insert(page, views.clone());
            }
            None => {
                let pages = HashMap::from([(page, views.clone())]);
                self.pages
                    .set(listing, Arc::new(RwLock::new(pages)), self.ttl)
                    .await;
            }
        }

        Ok(views)
    }

    async fn invalidate(&self, listing: &ListingKey) {
        self.pages.delete(listing).await;
    }

    fn clear(&self) {
        self.pages.clear();
    }
}

/// Cached translation repository decorator.
pub struct CachedTranslationRepository<R: ?Sized, Q: ?Sized> {
    domain: Arc<R>,
    views: Arc<Q>,
    records: TtlCache<RecordKey, TranslationView>,
    last_pages: ListingCache,
    search_pages: ListingCache,
    ttl: Duration,
}

impl<R, Q> CachedTranslationRepository<R, Q>
where
    R: TranslationRepository + ?Sized,
    Q: TranslationViewRepository + ?Sized,
{
    /// `ttl` applies to records and tag-filtered pages, `search_ttl` to
    /// text-search pages.
    pub fn new(domain: Arc<R>, views: Arc<Q>, ttl: Duration, search_ttl: Duration) -> Self {
        Self {
            domain,
            views,
            records: TtlCache::new(),
            last_pages: ListingCache::new(TtlCache::new(), ttl),
            search_pages: ListingCache::new(TtlCache::new(), search_ttl),
            ttl,
        }
    }

    /// Like `new`, with expiry sweepers stopped by `lifecycle`.
    pub fn with_lifecycle(
        domain: Arc<R>,
        views: Arc<Q>,
        ttl: Duration,
        search_ttl: Duration,
        lifecycle: &CancellationToken,
        sweep_interval: Duration,
    ) -> Self {
        Self {
            domain,
            views,
            records: TtlCache::with_lifecycle(lifecycle, sweep_interval),
            last_pages: ListingCache::new(TtlCache::with_lifecycle(lifecycle, sweep_interval), ttl),
            search_pages: ListingCache::new(
                TtlCache::with_lifecycle(lifecycle, sweep_interval),
                search_ttl,
            ),
            ttl,
        }
    }

    async fn invalidate_listings(&self, author_id: &str, lang_id: &str) {
        debug!(author_id, lang_id, "translation listings invalidated");
        let listing = ListingKey::new(author_id, lang_id);
        self.last_pages.invalidate(&listing).await;
        self.search_pages.invalidate(&listing).await;
    }

    async fn invalidate_record(&self, author_id: &str, id: &str) {
        debug!(author_id, id, "translation record invalidated");
        self.records.delete(&RecordKey::new(author_id, id)).await;
    }
}

#[async_trait]
impl<R, Q> TranslationRepository for CachedTranslationRepository<R, Q>
where
    R: TranslationRepository + ?Sized,
    Q: TranslationViewRepository + ?Sized,
{
    async fn create(&self, translation: &Translation) -> DomainResult<()> {
        let result = self.domain.create(translation).await;
        if result.is_ok() {
            self.invalidate_listings(&translation.author_id, &translation.lang_id)
                .await;
        }
        result
    }

    async fn update(&self, translation: &Translation) -> DomainResult<()> {
        let result = self.domain.update(translation).await;
        if result.is_ok() {
            self.invalidate_record(&translation.author_id, &translation.id)
                .await;
            self.invalidate_listings(&translation.author_id, &translation.lang_id)
                .await;
        }
        result
    }

    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Translation> {
        self.domain.get(id, author_id).await
    }

    async fn exist_by_source(&self, source: &str, author_id: &str, lang_id: &str) -> DomainResult<bool> {
        self.domain.exist_by_source(source, author_id, lang_id).await
    }

    async fn exist_by_tag(&self, tag_id: &str, author_id: &str) -> DomainResult<bool> {
        self.domain.exist_by_tag(tag_id, author_id).await
    }

    async fn exist_by_lang(&self, lang_id: &str, author_id: &str) -> DomainResult<bool> {
        self.domain.exist_by_lang(lang_id, author_id).await
    }

    async fn delete(&self, id: &str, author_id: &str) -> DomainResult<()> {
        // The listing key needs the language, which only the stored record knows
        let record = self.domain.get(id, author_id).await?;

        let result = self.domain.delete(id, author_id).await;
        if result.is_ok() {
            self.invalidate_record(author_id, id).await;
            self.invalidate_listings(author_id, &record.lang_id).await;
        }
        result
    }

    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize> {
        let result = self.domain.delete_by_author_id(author_id).await;
        if result.is_ok() {
            // No index from author to cached ids
            debug!(author_id, "translation caches cleared");
            self.records.clear();
            self.last_pages.clear();
            self.search_pages.clear();
        }
        result
    }
}

#[async_trait]
impl<R, Q> TranslationViewRepository for CachedTranslationRepository<R, Q>
where
    R: TranslationRepository + ?Sized,
    Q: TranslationViewRepository + ?Sized,
{
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<TranslationView> {
        let key = RecordKey::new(author_id, id);
        if let Some(view) = self.records.get(&key).await {
            return Ok(view);
        }

        debug!(author_id, id, "translation cache miss");
        let view = self.views.get_view(id, author_id).await?;
        self.records.set(key, view.clone(), self.ttl).await;
        Ok(view)
    }

    async fn get_last_views(
        &self,
        author_id: &str,
        lang_id: &str,
        page_size: usize,
        page: usize,
        tag_ids: &[String],
    ) -> DomainResult<LastTranslationViews> {
        self.last_pages
            .get_or_fetch(
                ListingKey::new(author_id, lang_id),
                PageKey::tags(page_size, page, tag_ids),
                || {
                    self.views
                        .get_last_views(author_id, lang_id, page_size, page, tag_ids)
                },
            )
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
        self.search_pages
            .get_or_fetch(
                ListingKey::new(author_id, lang_id),
                PageKey::source_part(page_size, page, source_part),
                || {
                    self.views.get_last_views_by_source_part(
                        author_id,
                        lang_id,
                        source_part,
                        page_size,
                        page,
                    )
                },
            )
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
        self.search_pages
            .get_or_fetch(
                ListingKey::new(author_id, lang_id),
                PageKey::target_part(page_size, page, target_part),
                || {
                    self.views.get_last_views_by_target_part(
                        author_id,
                        lang_id,
                        target_part,
                        page_size,
                        page,
                    )
                },
            )
            .await
    }

    async fn get_random_views(
        &self,
        author_id: &str,
        lang_id: &str,
        tag_ids: &[String],
        limit: usize,
    ) -> DomainResult<RandomViews> {
        self.views
            .get_random_views(author_id, lang_id, tag_ids, limit)
            .await
    }
}
