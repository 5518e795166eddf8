//! vocabd - vocabulary backend core
//!
//! Tags, languages and translations behind a cache-aside read layer.
//!
//! # Architecture
//!
//! Hexagonal layout:
//!
//! - **Domain Layer** (`domain`): models, repository ports, errors
//! - **Adapters** (`adapters`): in-memory store and the caching decorators
//! - **Service Layer** (`services`): query handlers
//! - **Infrastructure Layer** (`infrastructure`): config, logging, wiring
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use tokio_util::sync::CancellationToken;
//! use vocabd::infrastructure::bootstrap::Container;
//! use vocabd::{Config, LastTranslations};
//!
//! let container = Container::new(&Config::default(), CancellationToken::new());
//! let page = container
//!     .queries
//!     .last_translations
//!     .handle(LastTranslations { author_id: "a".into(), lang_id: "en".into(), ..Default::default() })
//!     .await?;
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::{CachedLangRepository, CachedTagRepository, CachedTranslationRepository, TtlCache};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    CacheConfig, Config, Lang, LangView, LastTranslationViews, LoggingConfig, RandomViews, Tag,
    TagView, Translation, TranslationView,
};
pub use domain::ports::{
    LangRepository, LangViewRepository, TagRepository, TagViewRepository, TranslationRepository,
    TranslationViewRepository,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::query::LastTranslations;
