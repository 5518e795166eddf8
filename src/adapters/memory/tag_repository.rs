//! In-memory implementation of the tag repositories.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Tag, TagView};
use crate::domain::ports::{TagRepository, TagViewRepository};

#[derive(Default)]
pub struct MemoryTagRepository {
    tags: RwLock<HashMap<String, Tag>>,
}

impl MemoryTagRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: &str, author_id: &str) -> DomainError {
        DomainError::TagNotFound {
            author_id: author_id.to_string(),
            id: id.to_string(),
        }
    }
}

#[async_trait]
impl TagRepository for MemoryTagRepository {
    async fn create(&self, tag: &Tag) -> DomainResult<()> {
        let mut tags = self.tags.write().await;
        if tags.contains_key(&tag.id) {
            return Err(DomainError::ValidationFailed(format!(
                "tag {} already exists",
                tag.id
            )));
        }
        tags.insert(tag.id.clone(), tag.clone());
        Ok(())
    }

    async fn update(&self, tag: &Tag) -> DomainResult<()> {
        let mut tags = self.tags.write().await;
        match tags.get_mut(&tag.id) {
            Some(stored) if stored.author_id == tag.author_id => {
                *stored = tag.clone();
                Ok(())
            }
            _ => Err(Self::not_found(&tag.id, &tag.author_id)),
        }
    }

    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Tag> {
        self.tags
            .read()
            .await
            .get(id)
            .filter(|tag| tag.author_id == author_id)
            .cloned()
            .ok_or_else(|| Self::not_found(id, author_id))
    }

    async fn exist_by_name(&self, name: &str, author_id: &str) -> DomainResult<bool> {
        Ok(self
            .tags
            .read()
            .await
            .values()
            .any(|tag| tag.author_id == author_id && tag.name == name))
    }

    async fn delete(&self, id: &str, author_id: &str) -> DomainResult<()> {
        let mut tags = self.tags.write().await;
        if !tags.get(id).is_some_and(|tag| tag.author_id == author_id) {
            return Err(Self::not_found(id, author_id));
        }
        tags.remove(id);
        Ok(())
    }

    async fn all_exist(&self, ids: &[String], author_id: &str) -> DomainResult<bool> {
        let tags = self.tags.read().await;
        Ok(ids
            .iter()
            .all(|id| tags.get(id).is_some_and(|tag| tag.author_id == author_id)))
    }

    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize> {
        let mut tags = self.tags.write().await;
        let before = tags.len();
        tags.retain(|_, tag| tag.author_id != author_id);
        Ok(before - tags.len())
    }
}

#[async_trait]
impl TagViewRepository for MemoryTagRepository {
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<TagView> {
        self.get(id, author_id).await.map(|tag| tag.to_view())
    }

    async fn get_views(&self, ids: &[String], author_id: &str) -> DomainResult<Vec<TagView>> {
        let tags = self.tags.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tags.get(id))
            .filter(|tag| tag.author_id == author_id)
            .map(Tag::to_view)
            .collect())
    }

    async fn get_all_views(&self, author_id: &str) -> DomainResult<Vec<TagView>> {
        let tags = self.tags.read().await;
        let mut owned: Vec<&Tag> = tags
            .values()
            .filter(|tag| tag.author_id == author_id)
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned.into_iter().map(Tag::to_view).collect())
    }
}
