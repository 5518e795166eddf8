//! In-memory implementation of the translation repositories.
//!
//! Views are composed from the injected tag and language view repositories,
//! so wiring the cached decorators in here makes every listing resolve its
//! tags and language through the cache.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{LastTranslationViews, RandomViews, Translation, TranslationView};
use crate::domain::ports::{
    LangViewRepository, TagViewRepository, TranslationRepository, TranslationViewRepository,
};

pub struct MemoryTranslationRepository {
    translations: RwLock<HashMap<String, Translation>>,
    tag_views: Arc<dyn TagViewRepository>,
    lang_views: Arc<dyn LangViewRepository>,
}

impl MemoryTranslationRepository {
    pub fn new(tag_views: Arc<dyn TagViewRepository>, lang_views: Arc<dyn LangViewRepository>) -> Self {
        Self {
            translations: RwLock::new(HashMap::new()),
            tag_views,
            lang_views,
        }
    }

    fn not_found(id: &str, author_id: &str) -> DomainError {
        DomainError::TranslationNotFound {
            author_id: author_id.to_string(),
            id: id.to_string(),
        }
    }

    /// Snapshot of the author's translations in one language matching
    /// `filter`, newest first.
    async fn select<F>(&self, author_id: &str, lang_id: &str, filter: F) -> Vec<Translation>
    where
        F: Fn(&Translation) -> bool,
    {
        let translations = self.translations.read().await;
        let mut selected: Vec<Translation> = translations
            .values()
            .filter(|t| t.author_id == author_id && t.lang_id == lang_id && filter(t))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        selected
    }

    async fn to_view(&self, record: &Translation) -> DomainResult<TranslationView> {
        let lang = self
            .lang_views
            .get_view(&record.lang_id, &record.author_id)
            .await?;

        let tags = if record.tag_ids.is_empty() {
            Vec::new()
        } else {
            let tags = self
                .tag_views
                .get_views(&record.tag_ids, &record.author_id)
                .await?;
            if tags.len() != record.tag_ids.len() {
                return Err(DomainError::MissingTags {
                    translation_id: record.id.clone(),
                });
            }
            tags
        };

        Ok(TranslationView {
            id: record.id.clone(),
            created_at: record.created_at,
            source: record.source.clone(),
            target: record.target.clone(),
            transcription: record.transcription.clone(),
            example: record.example.clone(),
            tags,
            lang,
        })
    }

    async fn to_views(&self, records: &[Translation]) -> DomainResult<Vec<TranslationView>> {
        let mut views = Vec::with_capacity(records.len());
        for record in records {
            views.push(self.to_view(record).await?);
        }
        Ok(views)
    }

    /// Cut page `page` (1-based) out of `matching`. An empty first page is
    /// fine; any other page past the end is an error.
    async fn paginate(
        &self,
        matching: Vec<Translation>,
        page_size: usize,
        page: usize,
    ) -> DomainResult<LastTranslationViews> {
        if page_size == 0 || page == 0 {
            return Err(DomainError::ValidationFailed(format!(
                "invalid pagination, page size {page_size}, page {page}"
            )));
        }

        let total_records = matching.len();
        if total_records == 0 && page == 1 {
            return Ok(LastTranslationViews::default());
        }

        let max_page = total_records.div_ceil(page_size);
        if page > max_page {
            return Err(DomainError::PageOutOfRange { page, max_page });
        }

        let records: Vec<Translation> = matching
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();

        Ok(LastTranslationViews {
            views: self.to_views(&records).await?,
            total_records,
        })
    }
}

#[async_trait]
impl TranslationRepository for MemoryTranslationRepository {
    async fn create(&self, translation: &Translation) -> DomainResult<()> {
        let mut translations = self.translations.write().await;
        if translations.contains_key(&translation.id) {
            return Err(DomainError::ValidationFailed(format!(
                "translation {} already exists",
                translation.id
            )));
        }
        translations.insert(translation.id.clone(), translation.clone());
        Ok(())
    }

    async fn update(&self, translation: &Translation) -> DomainResult<()> {
        let mut translations = self.translations.write().await;
        match translations.get_mut(&translation.id) {
            Some(stored) if stored.author_id == translation.author_id => {
                // A translation stays in the language it was created in
                if stored.lang_id != translation.lang_id {
                    return Err(DomainError::ValidationFailed(format!(
                        "translation {} can not move from lang {} to {}",
                        translation.id, stored.lang_id, translation.lang_id
                    )));
                }
                *stored = translation.clone();
                Ok(())
            }
            _ => Err(Self::not_found(&translation.id, &translation.author_id)),
        }
    }

    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Translation> {
        self.translations
            .read()
            .await
            .get(id)
            .filter(|t| t.author_id == author_id)
            .cloned()
            .ok_or_else(|| Self::not_found(id, author_id))
    }

    async fn exist_by_source(&self, source: &str, author_id: &str, lang_id: &str) -> DomainResult<bool> {
        Ok(self.translations.read().await.values().any(|t| {
            t.author_id == author_id && t.lang_id == lang_id && t.source == source
        }))
    }

    async fn exist_by_tag(&self, tag_id: &str, author_id: &str) -> DomainResult<bool> {
        Ok(self
            .translations
            .read()
            .await
            .values()
            .any(|t| t.author_id == author_id && t.tag_ids.iter().any(|id| id == tag_id)))
    }

    async fn exist_by_lang(&self, lang_id: &str, author_id: &str) -> DomainResult<bool> {
        Ok(self
            .translations
            .read()
            .await
            .values()
            .any(|t| t.author_id == author_id && t.lang_id == lang_id))
    }

    async fn delete(&self, id: &str, author_id: &str) -> DomainResult<()> {
        let mut translations = self.translations.write().await;
        if !translations.get(id).is_some_and(|t| t.author_id == author_id) {
            return Err(Self::not_found(id, author_id));
        }
        translations.remove(id);
        Ok(())
    }

    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize> {
        let mut translations = self.translations.write().await;
        let before = translations.len();
        translations.retain(|_, t| t.author_id != author_id);
        Ok(before - translations.len())
    }
}

#[async_trait]
impl TranslationViewRepository for MemoryTranslationRepository {
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<TranslationView> {
        let record = TranslationRepository::get(self, id, author_id).await?;
        self.to_view(&record).await
    }

    async fn get_last_views(
        &self,
        author_id: &str,
        lang_id: &str,
        page_size: usize,
        page: usize,
        tag_ids: &[String],
    ) -> DomainResult<LastTranslationViews> {
        let matching = self
            .select(author_id, lang_id, |t| t.has_all_tags(tag_ids))
            .await;
        self.paginate(matching, page_size, page).await
    }

    async fn get_last_views_by_source_part(
        &self,
        author_id: &str,
        lang_id: &str,
        source_part: &str,
        page_size: usize,
        page: usize,
    ) -> DomainResult<LastTranslationViews> {
        let matching = self
            .select(author_id, lang_id, |t| t.source.contains(source_part))
            .await;
        self.paginate(matching, page_size, page).await
    }

    async fn get_last_views_by_target_part(
        &self,
        author_id: &str,
        lang_id: &str,
        target_part: &str,
        page_size: usize,
        page: usize,
    ) -> DomainResult<LastTranslationViews> {
        let matching = self
            .select(author_id, lang_id, |t| t.target.contains(target_part))
            .await;
        self.paginate(matching, page_size, page).await
    }

    async fn get_random_views(
        &self,
        author_id: &str,
        lang_id: &str,
        tag_ids: &[String],
        limit: usize,
    ) -> DomainResult<RandomViews> {
        let matching = self
            .select(author_id, lang_id, |t| t.has_all_tags(tag_ids))
            .await;
        let sample: Vec<Translation> = {
            let mut rng = rand::thread_rng();
            matching.choose_multiple(&mut rng, limit).cloned().collect()
        };

        Ok(RandomViews {
            views: self.to_views(&sample).await?,
        })
    }
}
