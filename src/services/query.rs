//! Read-side query handlers.
//!
//! Handlers only see the view repository ports; whether a cache sits in
//! front of the store is decided by the composition root.

use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{LangView, LastTranslationViews, RandomViews, TagView, TranslationView};
use crate::domain::ports::{LangViewRepository, TagViewRepository, TranslationViewRepository};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;
pub const DEFAULT_RANDOM_LIMIT: usize = 20;
pub const MAX_RANDOM_LIMIT: usize = 100;

/// Clamp listing parameters: a page size outside `1..=MAX_PAGE_SIZE` falls
/// back to the default, pages start at 1.
pub fn normalize_paging(page_size: usize, page: usize) -> (usize, usize) {
    let page_size = if (1..=MAX_PAGE_SIZE).contains(&page_size) {
        page_size
    } else {
        DEFAULT_PAGE_SIZE
    };
    (page_size, page.max(1))
}

fn require(value: &str, field: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::ValidationFailed(format!("{field} is required")));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct SingleTag {
    pub id: String,
    pub author_id: String,
}

pub struct SingleTagHandler {
    tags: Arc<dyn TagViewRepository>,
}

impl SingleTagHandler {
    pub fn new(tags: Arc<dyn TagViewRepository>) -> Self {
        Self { tags }
    }

    pub async fn handle(&self, query: SingleTag) -> DomainResult<TagView> {
        self.tags.get_view(&query.id, &query.author_id).await
    }
}

#[derive(Debug, Clone)]
pub struct AllTags {
    pub author_id: String,
}

pub struct AllTagsHandler {
    tags: Arc<dyn TagViewRepository>,
}

impl AllTagsHandler {
    pub fn new(tags: Arc<dyn TagViewRepository>) -> Self {
        Self { tags }
    }

    /// All tags of the author, sorted by name.
    pub async fn handle(&self, query: AllTags) -> DomainResult<Vec<TagView>> {
        let mut views = self.tags.get_all_views(&query.author_id).await?;
        views.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(views)
    }
}

#[derive(Debug, Clone)]
pub struct SingleLang {
    pub id: String,
    pub author_id: String,
}

pub struct SingleLangHandler {
    langs: Arc<dyn LangViewRepository>,
}

impl SingleLangHandler {
    pub fn new(langs: Arc<dyn LangViewRepository>) -> Self {
        Self { langs }
    }

    pub async fn handle(&self, query: SingleLang) -> DomainResult<LangView> {
        self.langs.get_view(&query.id, &query.author_id).await
    }
}

#[derive(Debug, Clone)]
pub struct AllLangs {
    pub author_id: String,
}

pub struct AllLangsHandler {
    langs: Arc<dyn LangViewRepository>,
}

impl AllLangsHandler {
    pub fn new(langs: Arc<dyn LangViewRepository>) -> Self {
        Self { langs }
    }

    /// All languages of the author, sorted by name.
    pub async fn handle(&self, query: AllLangs) -> DomainResult<Vec<LangView>> {
        let mut views = self.langs.get_all_views(&query.author_id).await?;
        views.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(views)
    }
}

#[derive(Debug, Clone)]
pub struct SingleTranslation {
    pub id: String,
    pub author_id: String,
}

pub struct SingleTranslationHandler {
    translations: Arc<dyn TranslationViewRepository>,
}

impl SingleTranslationHandler {
    pub fn new(translations: Arc<dyn TranslationViewRepository>) -> Self {
        Self { translations }
    }

    pub async fn handle(&self, query: SingleTranslation) -> DomainResult<TranslationView> {
        self.translations.get_view(&query.id, &query.author_id).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct LastTranslations {
    pub author_id: String,
    pub lang_id: String,
    pub tag_ids: Vec<String>,
    pub page_size: usize,
    pub page: usize,
}

pub struct LastTranslationsHandler {
    translations: Arc<dyn TranslationViewRepository>,
}

impl LastTranslationsHandler {
    pub fn new(translations: Arc<dyn TranslationViewRepository>) -> Self {
        Self { translations }
    }

    pub async fn handle(&self, query: LastTranslations) -> DomainResult<LastTranslationViews> {
        let (page_size, page) = normalize_paging(query.page_size, query.page);
        self.translations
            .get_last_views(&query.author_id, &query.lang_id, page_size, page, &query.tag_ids)
            .await
    }
}

/// Listing search. At most one of `source_part` / `target_part` may be set;
/// with neither, the tag-filtered listing is returned.
#[derive(Debug, Clone, Default)]
pub struct SearchTranslations {
    pub author_id: String,
    pub lang_id: String,
    pub tag_ids: Vec<String>,
    pub source_part: Option<String>,
    pub target_part: Option<String>,
    pub page_size: usize,
    pub page: usize,
}

pub struct SearchTranslationsHandler {
    translations: Arc<dyn TranslationViewRepository>,
}

impl SearchTranslationsHandler {
    pub fn new(translations: Arc<dyn TranslationViewRepository>) -> Self {
        Self { translations }
    }

    pub async fn handle(&self, query: SearchTranslations) -> DomainResult<LastTranslationViews> {
        require(&query.author_id, "author_id")?;
        require(&query.lang_id, "lang_id")?;

        let (page_size, page) = normalize_paging(query.page_size, query.page);
        let source_part = query.source_part.as_deref().filter(|part| !part.is_empty());
        let target_part = query.target_part.as_deref().filter(|part| !part.is_empty());

        match (source_part, target_part) {
            (Some(_), Some(_)) => Err(DomainError::ValidationFailed(
                "source_part and target_part are mutually exclusive".to_string(),
            )),
            (Some(_), None) | (None, Some(_)) if !query.tag_ids.is_empty() => Err(
                DomainError::ValidationFailed("text search can not be combined with tags".to_string()),
            ),
            (Some(part), None) => {
                self.translations
                    .get_last_views_by_source_part(&query.author_id, &query.lang_id, part, page_size, page)
                    .await
            }
            (None, Some(part)) => {
                self.translations
                    .get_last_views_by_target_part(&query.author_id, &query.lang_id, part, page_size, page)
                    .await
            }
            (None, None) => {
                self.translations
                    .get_last_views(&query.author_id, &query.lang_id, page_size, page, &query.tag_ids)
                    .await
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RandomTranslations {
    pub author_id: String,
    pub lang_id: String,
    pub tag_ids: Vec<String>,
    pub limit: usize,
}

pub struct RandomTranslationsHandler {
    translations: Arc<dyn TranslationViewRepository>,
}

impl RandomTranslationsHandler {
    pub fn new(translations: Arc<dyn TranslationViewRepository>) -> Self {
        Self { translations }
    }

    pub async fn handle(&self, query: RandomTranslations) -> DomainResult<RandomViews> {
        require(&query.author_id, "author_id")?;
        require(&query.lang_id, "lang_id")?;

        let limit = if (1..=MAX_RANDOM_LIMIT).contains(&query.limit) {
            query.limit
        } else {
            DEFAULT_RANDOM_LIMIT
        };

        self.translations
            .get_random_views(&query.author_id, &query.lang_id, &query.tag_ids, limit)
            .await
    }
}
