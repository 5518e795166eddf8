//! Domain errors for the vocabulary backend.

use thiserror::Error;

/// Domain-level errors surfaced by repositories and query handlers.
///
/// Cache decorators never construct store errors themselves: whatever a
/// wrapped repository returns is handed back to the caller untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("can not find tag, author: {author_id}, tag: {id}")]
    TagNotFound { author_id: String, id: String },

    #[error("can not find lang, author: {author_id}, lang: {id}")]
    LangNotFound { author_id: String, id: String },

    #[error("can not find translation, author: {author_id}, translation: {id}")]
    TranslationNotFound { author_id: String, id: String },

    #[error("can not get translations page {page}, max page is {max_page}")]
    PageOutOfRange { page: usize, max_page: usize },

    #[error("can not find all tags of translation {translation_id}")]
    MissingTags { translation_id: String },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Store error: {0}")]
    StoreError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
