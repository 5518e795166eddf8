//! Recording test doubles for the repository ports.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    Lang, LangView, LastTranslationViews, RandomViews, Tag, TagView, Translation, TranslationView,
};
use crate::domain::ports::{
    LangRepository, LangViewRepository, TagRepository, TagViewRepository, TranslationRepository,
    TranslationViewRepository,
};

/// A call observed by a stub store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Create(String),
    Update(String),
    Get(String),
    Delete(String),
    DeleteByAuthor(String),
    Exists,
    GetView(String),
    GetViews(Vec<String>),
    GetAllViews(String),
    GetLastViews { lang_id: String, page: usize, tag_ids: Vec<String> },
    SearchSource(String),
    SearchTarget(String),
    Random,
}

pub(crate) fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

pub(crate) fn store_error() -> DomainError {
    DomainError::StoreError("testErr".to_string())
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<Call>>,
    write_error: Mutex<Option<DomainError>>,
    read_error: Mutex<Option<DomainError>>,
}

impl Recorder {
    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_result(&self) -> DomainResult<()> {
        self.write_error.lock().unwrap().clone().map_or(Ok(()), Err)
    }

    fn read_result(&self) -> DomainResult<()> {
        self.read_error.lock().unwrap().clone().map_or(Ok(()), Err)
    }
}

macro_rules! recorder_controls {
    ($store:ty) => {
        impl $store {
            pub(crate) fn calls(&self) -> Vec<Call> {
                self.recorder.calls.lock().unwrap().clone()
            }

            pub(crate) fn clear_calls(&self) {
                self.recorder.calls.lock().unwrap().clear();
            }

            pub(crate) fn fail_writes(&self, err: DomainError) {
                *self.recorder.write_error.lock().unwrap() = Some(err);
            }

            pub(crate) fn fail_reads(&self, err: DomainError) {
                *self.recorder.read_error.lock().unwrap() = Some(err);
            }
        }
    };
}

/// Tag store for a single author.
#[derive(Default)]
pub(crate) struct StubTagStore {
    recorder: Recorder,
    views: Mutex<Vec<TagView>>,
}

recorder_controls!(StubTagStore);

impl StubTagStore {
    pub(crate) fn with_views(views: Vec<TagView>) -> Arc<Self> {
        let store = Self::default();
        *store.views.lock().unwrap() = views;
        Arc::new(store)
    }
}

#[async_trait]
impl TagRepository for StubTagStore {
    async fn create(&self, tag: &Tag) -> DomainResult<()> {
        self.recorder.record(Call::Create(tag.author_id.clone()));
        self.recorder.write_result()
    }

    async fn update(&self, tag: &Tag) -> DomainResult<()> {
        self.recorder.record(Call::Update(tag.author_id.clone()));
        self.recorder.write_result()
    }

    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Tag> {
        self.recorder.record(Call::Get(id.to_string()));
        let view = self.get_view(id, author_id).await?;
        let mut tag = Tag::new(view.name, author_id);
        tag.id = view.id;
        Ok(tag)
    }

    async fn exist_by_name(&self, _name: &str, _author_id: &str) -> DomainResult<bool> {
        self.recorder.record(Call::Exists);
        Ok(false)
    }

    async fn delete(&self, id: &str, _author_id: &str) -> DomainResult<()> {
        self.recorder.record(Call::Delete(id.to_string()));
        self.recorder.write_result()
    }

    async fn all_exist(&self, _ids: &[String], _author_id: &str) -> DomainResult<bool> {
        self.recorder.record(Call::Exists);
        Ok(true)
    }

    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize> {
        self.recorder.record(Call::DeleteByAuthor(author_id.to_string()));
        self.recorder.write_result()?;
        Ok(self.views.lock().unwrap().len())
    }
}

#[async_trait]
impl TagViewRepository for StubTagStore {
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<TagView> {
        self.recorder.record(Call::GetView(id.to_string()));
        self.recorder.read_result()?;
        self.views
            .lock()
            .unwrap()
            .iter()
            .find(|view| view.id == id)
            .cloned()
            .ok_or_else(|| DomainError::TagNotFound {
                author_id: author_id.to_string(),
                id: id.to_string(),
            })
    }

    async fn get_views(&self, ids: &[String], _author_id: &str) -> DomainResult<Vec<TagView>> {
        self.recorder.record(Call::GetViews(ids.to_vec()));
        self.recorder.read_result()?;
        let views = self.views.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| views.iter().find(|view| &view.id == id).cloned())
            .collect())
    }

    async fn get_all_views(&self, author_id: &str) -> DomainResult<Vec<TagView>> {
        self.recorder.record(Call::GetAllViews(author_id.to_string()));
        self.recorder.read_result()?;
        Ok(self.views.lock().unwrap().clone())
    }
}

/// Language store for a single author.
#[derive(Default)]
pub(crate) struct StubLangStore {
    recorder: Recorder,
    views: Mutex<Vec<LangView>>,
}

recorder_controls!(StubLangStore);

impl StubLangStore {
    pub(crate) fn with_views(views: Vec<LangView>) -> Arc<Self> {
        let store = Self::default();
        *store.views.lock().unwrap() = views;
        Arc::new(store)
    }
}

#[async_trait]
impl LangRepository for StubLangStore {
    async fn create(&self, lang: &Lang) -> DomainResult<()> {
        self.recorder.record(Call::Create(lang.author_id.clone()));
        self.recorder.write_result()
    }

    async fn update(&self, lang: &Lang) -> DomainResult<()> {
        self.recorder.record(Call::Update(lang.author_id.clone()));
        self.recorder.write_result()
    }

    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Lang> {
        self.recorder.record(Call::Get(id.to_string()));
        let view = self.get_view(id, author_id).await?;
        let mut lang = Lang::new(view.name, author_id);
        lang.id = view.id;
        Ok(lang)
    }

    async fn exist(&self, _id: &str, _author_id: &str) -> DomainResult<bool> {
        self.recorder.record(Call::Exists);
        Ok(true)
    }

    async fn exist_by_name(&self, _name: &str, _author_id: &str) -> DomainResult<bool> {
        self.recorder.record(Call::Exists);
        Ok(false)
    }

    async fn delete(&self, id: &str, _author_id: &str) -> DomainResult<()> {
        self.recorder.record(Call::Delete(id.to_string()));
        self.recorder.write_result()
    }

    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize> {
        self.recorder.record(Call::DeleteByAuthor(author_id.to_string()));
        self.recorder.write_result()?;
        Ok(self.views.lock().unwrap().len())
    }
}

#[async_trait]
impl LangViewRepository for StubLangStore {
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<LangView> {
        self.recorder.record(Call::GetView(id.to_string()));
        self.recorder.read_result()?;
        self.views
            .lock()
            .unwrap()
            .iter()
            .find(|view| view.id == id)
            .cloned()
            .ok_or_else(|| DomainError::LangNotFound {
                author_id: author_id.to_string(),
                id: id.to_string(),
            })
    }

    async fn get_all_views(&self, author_id: &str) -> DomainResult<Vec<LangView>> {
        self.recorder.record(Call::GetAllViews(author_id.to_string()));
        self.recorder.read_result()?;
        Ok(self.views.lock().unwrap().clone())
    }
}

/// Translation store answering every listing with a fixed page.
#[derive(Default)]
pub(crate) struct StubTranslationStore {
    recorder: Recorder,
    records: Mutex<Vec<Translation>>,
    get_error: Mutex<Option<DomainError>>,
    page: Mutex<LastTranslationViews>,
}

recorder_controls!(StubTranslationStore);

impl StubTranslationStore {
    pub(crate) fn with_records(records: Vec<Translation>) -> Arc<Self> {
        let store = Self::default();
        *store.page.lock().unwrap() = LastTranslationViews {
            views: records.iter().map(view_of).collect(),
            total_records: records.len(),
        };
        *store.records.lock().unwrap() = records;
        Arc::new(store)
    }

    /// Make the write-side `get` fail while other calls keep working.
    pub(crate) fn fail_get(&self, err: DomainError) {
        *self.get_error.lock().unwrap() = Some(err);
    }

    pub(crate) fn set_page(&self, page: LastTranslationViews) {
        *self.page.lock().unwrap() = page;
    }
}

pub(crate) fn view_of(record: &Translation) -> TranslationView {
    TranslationView {
        id: record.id.clone(),
        created_at: record.created_at,
        source: record.source.clone(),
        target: record.target.clone(),
        transcription: record.transcription.clone(),
        example: record.example.clone(),
        tags: record
            .tag_ids
            .iter()
            .map(|id| TagView::new(id.clone(), id.clone()))
            .collect(),
        lang: LangView::new(record.lang_id.clone(), record.lang_id.clone()),
    }
}

#[async_trait]
impl TranslationRepository for StubTranslationStore {
    async fn create(&self, translation: &Translation) -> DomainResult<()> {
        self.recorder.record(Call::Create(translation.author_id.clone()));
        self.recorder.write_result()
    }

    async fn update(&self, translation: &Translation) -> DomainResult<()> {
        self.recorder.record(Call::Update(translation.author_id.clone()));
        self.recorder.write_result()
    }

    async fn get(&self, id: &str, author_id: &str) -> DomainResult<Translation> {
        self.recorder.record(Call::Get(id.to_string()));
        if let Some(err) = self.get_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| DomainError::TranslationNotFound {
                author_id: author_id.to_string(),
                id: id.to_string(),
            })
    }

    async fn exist_by_source(&self, _source: &str, _author_id: &str, _lang_id: &str) -> DomainResult<bool> {
        self.recorder.record(Call::Exists);
        Ok(false)
    }

    async fn exist_by_tag(&self, _tag_id: &str, _author_id: &str) -> DomainResult<bool> {
        self.recorder.record(Call::Exists);
        Ok(false)
    }

    async fn exist_by_lang(&self, _lang_id: &str, _author_id: &str) -> DomainResult<bool> {
        self.recorder.record(Call::Exists);
        Ok(false)
    }

    async fn delete(&self, id: &str, _author_id: &str) -> DomainResult<()> {
        self.recorder.record(Call::Delete(id.to_string()));
        self.recorder.write_result()
    }

    async fn delete_by_author_id(&self, author_id: &str) -> DomainResult<usize> {
        self.recorder.record(Call::DeleteByAuthor(author_id.to_string()));
        self.recorder.write_result()?;
        Ok(self.records.lock().unwrap().len())
    }
}

#[async_trait]
impl TranslationViewRepository for StubTranslationStore {
    async fn get_view(&self, id: &str, author_id: &str) -> DomainResult<TranslationView> {
        self.recorder.record(Call::GetView(id.to_string()));
        self.recorder.read_result()?;
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|record| record.id == id)
            .map(view_of)
            .ok_or_else(|| DomainError::TranslationNotFound {
                author_id: author_id.to_string(),
                id: id.to_string(),
            })
    }

    async fn get_last_views(
        &self,
        _author_id: &str,
        lang_id: &str,
        _page_size: usize,
        page: usize,
        tag_ids: &[String],
    ) -> DomainResult<LastTranslationViews> {
        self.recorder.record(Call::GetLastViews {
            lang_id: lang_id.to_string(),
            page,
            tag_ids: tag_ids.to_vec(),
        });
        self.recorder.read_result()?;
        Ok(self.page.lock().unwrap().clone())
    }

    async fn get_last_views_by_source_part(
        &self,
        _author_id: &str,
        _lang_id: &str,
        source_part: &str,
        _page_size: usize,
        _page: usize,
    ) -> DomainResult<LastTranslationViews> {
        self.recorder.record(Call::SearchSource(source_part.to_string()));
        self.recorder.read_result()?;
        Ok(self.page.lock().unwrap().clone())
    }

    async fn get_last_views_by_target_part(
        &self,
        _author_id: &str,
        _lang_id: &str,
        target_part: &str,
        _page_size: usize,
        _page: usize,
    ) -> DomainResult<LastTranslationViews> {
        self.recorder.record(Call::SearchTarget(target_part.to_string()));
        self.recorder.read_result()?;
        Ok(self.page.lock().unwrap().clone())
    }

    async fn get_random_views(
        &self,
        _author_id: &str,
        _lang_id: &str,
        _tag_ids: &[String],
        _limit: usize,
    ) -> DomainResult<RandomViews> {
        self.recorder.record(Call::Random);
        self.recorder.read_result()?;
        Ok(RandomViews {
            views: self.page.lock().unwrap().views.clone(),
        })
    }
}

/// Translation with a fixed id.
pub(crate) fn translation(id: &str, author_id: &str, lang_id: &str) -> Translation {
    let mut record = Translation::new(format!("source {id}"), format!("target {id}"), author_id, lang_id, vec![]);
    record.id = id.to_string();
    record
}
