use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::View;

/// Tag owned by an author, used to group translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique tag identifier
    pub id: String,

    /// Owner of the tag
    pub author_id: String,

    /// Display name of the tag
    pub name: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Tag {
    /// Create a new tag with a generated identifier
    pub fn new(name: impl Into<String>, author_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            author_id: author_id.into(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename the tag
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Read-side projection of this tag
    pub fn to_view(&self) -> TagView {
        TagView {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Read-optimized tag projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagView {
    pub id: String,
    pub name: String,
}

impl TagView {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl View for TagView {
    fn id(&self) -> &str {
        &self.id
    }
}
