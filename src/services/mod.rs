//! Application services.

pub mod query;

pub use query::{
    AllLangs, AllLangsHandler, AllTags, AllTagsHandler, LastTranslations, LastTranslationsHandler,
    RandomTranslations, RandomTranslationsHandler, SearchTranslations, SearchTranslationsHandler,
    SingleLang, SingleLangHandler, SingleTag, SingleTagHandler, SingleTranslation,
    SingleTranslationHandler,
};
