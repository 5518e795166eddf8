use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::View;

/// Language an author writes translations for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lang {
    /// Unique language identifier
    pub id: String,

    /// Owner of the language entry
    pub author_id: String,

    /// Language name (e.g. "en")
    pub name: String,
}

impl Lang {
    /// Create a new language with a generated identifier
    pub fn new(name: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author_id: author_id.into(),
            name: name.into(),
        }
    }

    pub fn to_view(&self) -> LangView {
        LangView {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Read-optimized language projection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangView {
    pub id: String,
    pub name: String,
}

impl LangView {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl View for LangView {
    fn id(&self) -> &str {
        &self.id
    }
}
