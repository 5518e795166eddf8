//! Cache keys for the translation caches.

/// Single-record key. Scoped by author so a cached view is never served to
/// another author requesting the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RecordKey {
    pub(crate) author_id: String,
    pub(crate) id: String,
}

impl RecordKey {
    pub(crate) fn new(author_id: &str, id: &str) -> Self {
        Self {
            author_id: author_id.to_string(),
            id: id.to_string(),
        }
    }
}

/// Outer key of a paged listing map: every page of one author's translations
/// in one language lives under it and is invalidated together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ListingKey {
    pub(crate) author_id: String,
    pub(crate) lang_id: String,
}

impl ListingKey {
    pub(crate) fn new(author_id: &str, lang_id: &str) -> Self {
        Self {
            author_id: author_id.to_string(),
            lang_id: lang_id.to_string(),
        }
    }
}

/// Inner key of a paged listing map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum PageKey {
    /// Tag-filtered page, tag ids sorted lexicographically.
    Tags {
        page_size: usize,
        page: usize,
        tag_ids: Vec<String>,
    },
    SourcePart {
        page_size: usize,
        page: usize,
        part: String,
    },
    TargetPart {
        page_size: usize,
        page: usize,
        part: String,
    },
}

impl PageKey {
    /// Filter order never matters: `[b, a]` and `[a, b]` build the same key.
    pub(crate) fn tags(page_size: usize, page: usize, tag_ids: &[String]) -> Self {
        let mut tag_ids = tag_ids.to_vec();
        tag_ids.sort_unstable();

        Self::Tags {
            page_size,
            page,
            tag_ids,
        }
    }

    pub(crate) fn source_part(page_size: usize, page: usize, part: &str) -> Self {
        Self::SourcePart {
            page_size,
            page,
            part: part.to_string(),
        }
    }

    pub(crate) fn target_part(page_size: usize, page: usize, part: &str) -> Self {
        Self::TargetPart {
            page_size,
            page,
            part: part.to_string(),
        }
    }
}
