pub mod config;
pub mod lang;
pub mod tag;
pub mod translation;

pub use config::{CacheConfig, Config, LoggingConfig};
pub use lang::{Lang, LangView};
pub use tag::{Tag, TagView};
pub use translation::{LastTranslationViews, RandomViews, Translation, TranslationView};

/// Read-side projection addressable by its entity identifier
pub trait View {
    fn id(&self) -> &str;
}
