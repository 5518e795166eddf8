//! In-memory implementation of the language repositories.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Lang, LangView};
use crate::domain::ports::{LangRepository, LangViewRepository};

#[derive(Default)]
pub struct MemoryLangRepository {
    langs: RwLock<HashMap<String, Lang>>,
}

impl MemoryLangRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: &str, author_id: &str) -> DomainError {
        DomainError::LangNotFound {
            author_id: author_id.to_string(),
            id: id.to_string(),
        }
    }
}

#[async_trait]
impl LangRepository for MemoryLangRepository {
    async fn create(&self, lang: &Lang) -> DomainResult<()> {
        let mut langs = self.langs.write().await;
        if langs.contains_key(&lang.id) {
            return Err(DomainError::ValidationFailed(format!(
                "lang {} already exists",
                lang.id
            )));
        }
        langs.insert(lang.id.clone(), lang.clone());
        Ok(())
    }

    async fn update(&self, lang: &Lang) -> DomainResult<()> {
        let mut langs = self.langs.write().await;
        match langs.get_mut(&lang.id) {
            Some(stored) if stored.author_id == lang.author_id => {
                *stored = lang.clone();
                Ok(())
            }
            _ => Err(Self::not_found(&lang.id, &lang.author_id)),
        }
    }

    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Lang> {
        self.langs
            .read()
            .await
            .get(id)
            .filter(|lang| lang.author_id == author_id)
            .cloned()
            .ok_or_else(|| Self::not_found(id, author_id))
    }

    async fn exist(&self, id: &str, author_id: &str) -> DomainResult<bool> {
        Ok(self
            .langs
            .read()
            .await
            .get(id)
            .is_some_and(|lang| lang.author_id == author_id))
    }

    async fn exist_by_name(&self, name: &str, author_id: &str) -> DomainResult<bool> {
        Ok(self
            .langs
            .read()
            .await
            .values()
            .any(|lang| lang.author_id == author_id && lang.name == name))
    }

    async fn delete(&self, id: &str, author_id: &str) -> DomainResult<()> {
        let mut langs = self.langs.write().await;
        if !langs.get(id).is_some_and(|lang| lang.author_id == author_id) {
            return Err(Self::not_found(id, author_id));
        }
        langs.remove(id);
        Ok(())
    }

    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize> {
        let mut langs = self.langs.write().await;
        let before = langs.len();
        langs.retain(|_, lang| lang.author_id != author_id);
        Ok(before - langs.len())
    }
}

#[async_trait]
impl LangViewRepository for MemoryLangRepository {
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<LangView> {
        self.get(id, author_id).await.map(|lang| lang.to_view())
    }

    async fn get_all_views(&self, author_id: &str) -> DomainResult<Vec<LangView>> {
        let langs = self.langs.read().await;
        let mut views: Vec<LangView> = langs
            .values()
            .filter(|lang| lang.author_id == author_id)
            .map(Lang::to_view)
            .collect();
        views.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(views)
    }
}
