use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{LangView, TagView, View};

/// Translation of a source phrase into a target phrase for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Unique translation identifier
    pub id: String,

    /// Owner of the translation
    pub author_id: String,

    /// Language the source phrase belongs to
    pub lang_id: String,

    /// Phrase being translated
    pub source: String,

    /// Translated phrase
    pub target: String,

    /// Optional pronunciation hint
    pub transcription: String,

    /// Optional usage example
    pub example: String,

    /// Tags attached to the translation
    pub tag_ids: Vec<String>,

    /// Creation timestamp, listings are ordered by it (newest first)
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Translation {
    /// Create a new translation with a generated identifier
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        author_id: impl Into<String>,
        lang_id: impl Into<String>,
        tag_ids: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            author_id: author_id.into(),
            lang_id: lang_id.into(),
            source: source.into(),
            target: target.into(),
            transcription: String::new(),
            example: String::new(),
            tag_ids,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields of the translation
    pub fn apply_changes(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        transcription: impl Into<String>,
        example: impl Into<String>,
        tag_ids: Vec<String>,
    ) {
        self.source = source.into();
        self.target = target.into();
        self.transcription = transcription.into();
        self.example = example.into();
        self.tag_ids = tag_ids;
        self.updated_at = Utc::now();
    }

    /// Whether the translation carries every tag in `tag_ids`
    pub fn has_all_tags(&self, tag_ids: &[String]) -> bool {
        tag_ids.iter().all(|tag| self.tag_ids.contains(tag))
    }
}

/// Read-optimized translation projection with resolved tag and language views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationView {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub source: String,
    pub target: String,
    pub transcription: String,
    pub example: String,
    pub tags: Vec<TagView>,
    pub lang: LangView,
}

impl View for TranslationView {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One page of the newest translations matching a listing filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastTranslationViews {
    /// Views on the requested page
    pub views: Vec<TranslationView>,

    /// Number of records matching the filter across all pages
    pub total_records: usize,
}

/// Random sample of translations, used for practice sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomViews {
    pub views: Vec<TranslationView>,
}
