//! In-memory caching layer for hot-path repository reads.
//!
//! Cache-aside decorators over the store repositories: reads are populated
//! on miss, successful writes invalidate. All entries live in `TtlCache`
//! instances backed by `moka`.

mod author_views;
pub mod cached_lang_repository;
pub mod cached_tag_repository;
pub mod cached_translation_repository;
mod keys;
pub mod ttl_cache;

#[cfg(test)]
mod testing;

pub use cached_lang_repository::CachedLangRepository;
pub use cached_tag_repository::CachedTagRepository;
pub use cached_translation_repository::CachedTranslationRepository;
pub use ttl_cache::TtlCache;
