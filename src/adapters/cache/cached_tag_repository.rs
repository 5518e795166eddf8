//! Cached wrapper for the tag repositories.
//!
//! Caches, per author, the map from tag id to tag view. Batch lookups only
//! fetch the ids missing from the cached map. Every successful write drops
//! the author's whole map.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::author_views::AuthorViews;
use super::ttl_cache::TtlCache;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Tag, TagView};
use crate::domain::ports::{TagRepository, TagViewRepository};

/// Cached tag repository decorator.
///
/// Drop-in replacement for the wrapped write and view repositories: same
/// results, same errors, fewer store round trips.
pub struct CachedTagRepository<R: ?Sized, Q: ?Sized> {
    domain: Arc<R>,
    views: Arc<Q>,
    /// Author id -> map of tag id -> view.
    cache: TtlCache<String, Arc<AuthorViews<TagView>>>,
    ttl: Duration,
}

impl<R, Q> CachedTagRepository<R, Q>
where
    R: TagRepository + ?Sized,
    Q: TagViewRepository + ?Sized,
{
    /// Create a cached repository without background expiry sweeping.
    pub fn new(domain: Arc<R>, views: Arc<Q>, ttl: Duration) -> Self {
        Self {
            domain,
            views,
            cache: TtlCache::new(),
            ttl,
        }
    }

    /// Create a cached repository whose expired entries are swept until
    /// `lifecycle` is cancelled.
    pub fn with_lifecycle(
        domain: Arc<R>,
        views: Arc<Q>,
        ttl: Duration,
        lifecycle: &CancellationToken,
        sweep_interval: Duration,
    ) -> Self {
        Self {
            domain,
            views,
            cache: TtlCache::with_lifecycle(lifecycle, sweep_interval),
            ttl,
        }
    }

    async fn invalidate(&self, author_id: &str) {
        debug!(author_id, "tag cache invalidated");
        self.cache.delete(author_id).await;
    }

    /// Load every tag view of the author and cache them as a complete map.
    async fn load_author(&self, author_id: &str) -> DomainResult<Arc<AuthorViews<TagView>>> {
        let views = self.views.get_all_views(author_id).await?;
        let map = Arc::new(AuthorViews::complete(views));
        self.cache
            .set(author_id.to_string(), Arc::clone(&map), self.ttl)
            .await;
        Ok(map)
    }
}

#[async_trait]
impl<R, Q> TagRepository for CachedTagRepository<R, Q>
where
    R: TagRepository + ?Sized,
    Q: TagViewRepository + ?Sized,
{
    async fn create(&self, tag: &Tag) -> DomainResult<()> {
        let result = self.domain.create(tag).await;
        if result.is_ok() {
            self.invalidate(&tag.author_id).await;
        }
        result
    }

    async fn update(&self, tag: &Tag) -> DomainResult<()> {
        let result = self.domain.update(tag).await;
        if result.is_ok() {
            self.invalidate(&tag.author_id).await;
        }
        result
    }

    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Tag> {
        self.domain.get(id, author_id).await
    }

    async fn exist_by_name(&self, name: &str, author_id: &str) -> DomainResult<bool> {
        self.domain.exist_by_name(name, author_id).await
    }

    async fn delete(&self, id: &str, author_id: &str) -> DomainResult<()> {
        let result = self.domain.delete(id, author_id).await;
        if result.is_ok() {
            // Whole map, other cached aggregates may reference the tag
            self.invalidate(author_id).await;
        }
        result
    }

    async fn all_exist(&self, ids: &[String], author_id: &str) -> DomainResult<bool> {
        self.domain.all_exist(ids, author_id).await
    }

    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize> {
        let result = self.domain.delete_by_author_id(author_id).await;
        if result.is_ok() {
            self.invalidate(author_id).await;
        }
        result
    }
}

#[async_trait]
impl<R, Q> TagViewRepository for CachedTagRepository<R, Q>
where
    R: TagRepository + ?Sized,
    Q: TagViewRepository + ?Sized,
{
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<TagView> {
        let ids = [id.to_string()];
        let found = match self.cache.get(author_id).await {
            Some(_) => self.get_views(&ids, author_id).await?,
            None => {
                debug!(author_id, "tag cache miss, loading author");
                let map = self.load_author(author_id).await?;
                map.pick(&ids).await
            }
        };

        found
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::TagNotFound {
                author_id: author_id.to_string(),
                id: id.to_string(),
            })
    }

    /// Ids that do not exist are silently left out of the result; callers
    /// treat a missing tag as deleted.
    async fn get_views(&self, ids: &[String], author_id: &str) -> DomainResult<Vec<TagView>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let Some(map) = self.cache.get(author_id).await else {
            // Only the requested ids, not a full-author load
            debug!(author_id, requested = ids.len(), "tag cache miss, fetching ids");
            let fetched = self.views.get_views(ids, author_id).await?;
            let map = Arc::new(AuthorViews::partial(fetched));
            self.cache
                .set(author_id.to_string(), Arc::clone(&map), self.ttl)
                .await;
            return Ok(map.pick(ids).await);
        };

        let missing = map.missing(ids).await;
        if !missing.is_empty() {
            debug!(author_id, missing = missing.len(), "tag cache partial miss, backfilling");
            let fetched = self.views.get_views(&missing, author_id).await?;
            map.merge(fetched).await;
        }

        Ok(map.pick(ids).await)
    }

    async fn get_all_views(&self, author_id: &str) -> DomainResult<Vec<TagView>> {
        if let Some(map) = self.cache.get(author_id).await {
            if map.is_complete() {
                return Ok(map.values().await);
            }
        }

        let map = self.load_author(author_id).await?;
        Ok(map.values().await)
    }
}
