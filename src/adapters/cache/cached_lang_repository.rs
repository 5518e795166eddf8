//! Cached wrapper for the language repositories.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::author_views::AuthorViews;
use super::ttl_cache::TtlCache;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Lang, LangView};
use crate::domain::ports::{LangRepository, LangViewRepository};

/// Cached language repository decorator.
///
/// Languages are few per author, so every miss loads the author's full set;
/// there is no batch-by-ids path.
pub struct CachedLangRepository<R: ?Sized, Q: ?Sized> {
    domain: Arc<R>,
    views: Arc<Q>,
    cache: TtlCache<String, Arc<AuthorViews<LangView>>>,
    ttl: Duration,
}

impl<R, Q> CachedLangRepository<R, Q>
where
    R: LangRepository + ?Sized,
    Q: LangViewRepository + ?Sized,
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

    /// Like `new`, with expiry sweepers stopped by `lifecycle`.
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
        debug!(author_id, "lang cache invalidated");
        self.cache.delete(author_id).await;
    }

    async fn author_views(&self, author_id: &str) -> DomainResult<Arc<AuthorViews<LangView>>> {
        if let Some(map) = self.cache.get(author_id).await {
            return Ok(map);
        }

        debug!(author_id, "lang cache miss, loading author");
        let views = self.views.get_all_views(author_id).await?;
        let map = Arc::new(AuthorViews::complete(views));
        self.cache
            .set(author_id.to_string(), Arc::clone(&map), self.ttl)
            .await;
        Ok(map)
    }
}

#[async_trait]
impl<R, Q> LangRepository for CachedLangRepository<R, Q>
where
    R: LangRepository + ?Sized,
    Q: LangViewRepository + ?Sized,
{
    async fn create(&self, lang: &Lang) -> DomainResult<()> {
        let result = self.domain.create(lang).await;
        if result.is_ok() {
            self.invalidate(&lang.author_id).await;
        }
        result
    }

    async fn update(&self, lang: &Lang) -> DomainResult<()> {
        let result = self.domain.update(lang).await;
        if result.is_ok() {
            self.invalidate(&lang.author_id).await;
        }
        result
    }

    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Lang> {
        self.domain.get(id, author_id).await
    }

    async fn exist(&self, id: &str, author_id: &str) -> DomainResult<bool> {
        self.domain.exist(id, author_id).await
    }

    async fn exist_by_name(&self, name: &str, author_id: &str) -> DomainResult<bool> {
        self.domain.exist_by_name(name, author_id).await
    }

    async fn delete(&self, id: &str, author_id: &str) -> DomainResult<()> {
        let result = self.domain.delete(id, author_id).await;
        if result.is_ok() {
            self.invalidate(author_id).await;
        }
        result
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
impl<R, Q> LangViewRepository for CachedLangRepository<R, Q>
where
    R: LangRepository + ?Sized,
    Q: LangViewRepository + ?Sized,
{
    /// A cached map without `id` is authoritative: no reload, not found.
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<LangView> {
        let map = self.author_views(author_id).await?;

        map.get(id).await.ok_or_else(|| DomainError::LangNotFound {
            author_id: author_id.to_string(),
            id: id.to_string(),
        })
    }

    async fn get_all_views(&self, author_id: &str) -> DomainResult<Vec<LangView>> {
        let map = self.author_views(author_id).await?;
        Ok(map.values().await)
    }
}
