//! Per-author map from entity id to view.
//!
//! The map is shared through an `Arc` stored in a `TtlCache`; invalidation
//! replaces or deletes the whole `Arc`, so only the partial-miss backfill ever
//! mutates a map in place.

use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use crate::domain::models::View;

pub(crate) struct AuthorViews<V> {
    views: RwLock<HashMap<String, V>>,
    /// Built from a full-author load rather than a subset of ids.
    complete: bool,
}

impl<V: View + Clone> AuthorViews<V> {
    /// Map holding every view of the author.
    pub(crate) fn complete(views: Vec<V>) -> Self {
        Self::build(views, true)
    }

    /// Map holding only the views fetched for specific ids.
    pub(crate) fn partial(views: Vec<V>) -> Self {
        Self::build(views, false)
    }

    fn build(views: Vec<V>, complete: bool) -> Self {
        let views = views
            .into_iter()
            .map(|view| (view.id().to_string(), view))
            .collect();

        Self {
            views: RwLock::new(views),
            complete,
        }
    }

    pub(crate) const fn is_complete(&self) -> bool {
        self.complete
    }

    pub(crate) async fn get(&self, id: &str) -> Option<V> {
        self.views.read().await.get(id).cloned()
    }

    pub(crate) async fn values(&self) -> Vec<V> {
        self.views.read().await.values().cloned().collect()
    }

    /// Ids not present in the map, deduplicated, in request order.
    pub(crate) async fn missing(&self, ids: &[String]) -> Vec<String> {
        let views = self.views.read().await;
        let mut seen = HashSet::new();

        ids.iter()
            .filter(|id| !views.contains_key(id.as_str()) && seen.insert(id.as_str()))
            .cloned()
            .collect()
    }

    pub(crate) async fn merge(&self, fetched: Vec<V>) {
        let mut views = self.views.write().await;
        for view in fetched {
            views.insert(view.id().to_string(), view);
        }
    }

    /// Views for `ids` in request order; ids without a view are skipped.
    pub(crate) async fn pick(&self, ids: &[String]) -> Vec<V> {
        let views = self.views.read().await;
        ids.iter().filter_map(|id| views.get(id).cloned()).collect()
    }
}
