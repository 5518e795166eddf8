//! Composition root.
//!
//! Builds the in-memory stores, wraps them in the cache decorators and hands
//! the cached view repositories to the query handlers. Every cache shares
//! one lifecycle token; cancelling it stops all expiry sweepers.

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::adapters::cache::{CachedLangRepository, CachedTagRepository, CachedTranslationRepository};
use crate::adapters::memory::{MemoryLangRepository, MemoryTagRepository, MemoryTranslationRepository};
use crate::domain::models::Config;
use crate::services::query::{
    AllLangsHandler, AllTagsHandler, LastTranslationsHandler, RandomTranslationsHandler,
    SearchTranslationsHandler, SingleLangHandler, SingleTagHandler, SingleTranslationHandler,
};

pub type TagStore = CachedTagRepository<MemoryTagRepository, MemoryTagRepository>;
pub type LangStore = CachedLangRepository<MemoryLangRepository, MemoryLangRepository>;
pub type TranslationStore =
    CachedTranslationRepository<MemoryTranslationRepository, MemoryTranslationRepository>;

/// Query handlers wired to the cached view repositories.
pub struct Queries {
    pub single_tag: SingleTagHandler,
    pub all_tags: AllTagsHandler,
    pub single_lang: SingleLangHandler,
    pub all_langs: AllLangsHandler,
    pub single_translation: SingleTranslationHandler,
    pub last_translations: LastTranslationsHandler,
    pub search_translations: SearchTranslationsHandler,
    pub random_translations: RandomTranslationsHandler,
}

pub struct Container {
    /// Cached tag repository, write and view side.
    pub tags: Arc<TagStore>,
    pub langs: Arc<LangStore>,
    pub translations: Arc<TranslationStore>,
    pub queries: Queries,
    lifecycle: CancellationToken,
}

impl Container {
    /// Wire everything. Must be called from within a tokio runtime, each
    /// cache spawns its sweeper here.
    pub fn new(config: &Config, lifecycle: CancellationToken) -> Self {
        let cache = &config.cache;
        let sweep = cache.sweep_interval();

        let tag_store = Arc::new(MemoryTagRepository::new());
        let tags = Arc::new(CachedTagRepository::with_lifecycle(
            Arc::clone(&tag_store),
            tag_store,
            cache.tag_ttl(),
            &lifecycle,
            sweep,
        ));

        let lang_store = Arc::new(MemoryLangRepository::new());
        let langs = Arc::new(CachedLangRepository::with_lifecycle(
            Arc::clone(&lang_store),
            lang_store,
            cache.lang_ttl(),
            &lifecycle,
            sweep,
        ));

        // Listings resolve tags and languages through the caches
        let translation_store = Arc::new(MemoryTranslationRepository::new(tags.clone(), langs.clone()));
        let translations = Arc::new(CachedTranslationRepository::with_lifecycle(
            Arc::clone(&translation_store),
            translation_store,
            cache.translation_ttl(),
            cache.translation_search_ttl(),
            &lifecycle,
            sweep,
        ));

        let queries = Queries {
            single_tag: SingleTagHandler::new(tags.clone()),
            all_tags: AllTagsHandler::new(tags.clone()),
            single_lang: SingleLangHandler::new(langs.clone()),
            all_langs: AllLangsHandler::new(langs.clone()),
            single_translation: SingleTranslationHandler::new(translations.clone()),
            last_translations: LastTranslationsHandler::new(translations.clone()),
            search_translations: SearchTranslationsHandler::new(translations.clone()),
            random_translations: RandomTranslationsHandler::new(translations.clone()),
        };

        info!(
            tag_ttl_secs = cache.tag_ttl_secs,
            lang_ttl_secs = cache.lang_ttl_secs,
            translation_ttl_secs = cache.translation_ttl_secs,
            translation_search_ttl_secs = cache.translation_search_ttl_secs,
            "cache layer ready"
        );

        Self {
            tags,
            langs,
            translations,
            queries,
            lifecycle,
        }
    }

    pub fn lifecycle(&self) -> &CancellationToken {
        &self.lifecycle
    }

    /// Stop background cache maintenance. Cached data stays readable.
    pub fn shutdown(&self) {
        info!("shutting down cache sweepers");
        self.lifecycle.cancel();
    }
}
