//! In-memory document store.
//!
//! Stands in for the persistent store behind the cache decorators. Each
//! repository keeps one collection keyed by entity id and scopes every
//! lookup by author.

pub mod lang_repository;
pub mod tag_repository;
pub mod translation_repository;

pub use lang_repository::MemoryLangRepository;
pub use tag_repository::MemoryTagRepository;
pub use translation_repository::MemoryTranslationRepository;
