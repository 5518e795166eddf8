//! Port trait definitions (Hexagonal Architecture)
//!
//! Every entity has a write-side repository used by commands and a
//! read-side view repository used by queries. Store adapters implement both;
//! cache decorators implement both by wrapping a store.

pub mod lang_repository;
pub mod tag_repository;
pub mod translation_repository;

pub use lang_repository::{LangRepository, LangViewRepository};
pub use tag_repository::{TagRepository, TagViewRepository};
pub use translation_repository::{TranslationRepository, TranslationViewRepository};
