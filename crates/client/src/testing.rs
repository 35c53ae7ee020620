//! In-memory fakes shared by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use brandkit_core::pagination::{PageRequest, PageResult};
use brandkit_core::resource::BrandEntity;
use brandkit_core::types::DbId;
use brandkit_core::validation::AssetKind;
use brandkit_core::models::asset::{Asset, CreateAsset};
use brandkit_core::models::color::{Color, CreateColor};
use brandkit_core::models::typography::{CreateTypography, Typography};
use chrono::Utc;
use tokio::sync::Semaphore;

use crate::context::ResourceContext;
use crate::editor::{CanvasEditor, ElementKind, SelectedElement, TextStyle};
use crate::error::ClientError;
use crate::upload::{UploadFile, Uploader};

// ---------------------------------------------------------------------------
// Entity builders
// ---------------------------------------------------------------------------

pub fn color(name: &str, hex: &str) -> Color {
    Color {
        id: 0,
        name: name.into(),
        hex: hex.into(),
        created_at: Utc::now(),
    }
}

pub fn typography(name: &str, family: &str, size: f64) -> Typography {
    Typography {
        id: 0,
        name: name.into(),
        font_family: family.into(),
        font_size: size,
        line_height: 1.2,
        bold: false,
        italic: false,
        underline: false,
        strikethrough: false,
        created_at: Utc::now(),
    }
}

pub fn asset(name: &str, url: &str) -> Asset {
    Asset {
        id: 0,
        name: name.into(),
        url: url.into(),
        created_at: Utc::now(),
    }
}

/// How the fake store builds, edits and searches one entity type.
pub trait Fixture: BrandEntity {
    type Draft: Send + Sync + 'static;

    fn with_id(self, id: DbId) -> Self;
    fn from_draft(id: DbId, draft: &Self::Draft) -> Self;
    fn apply_draft(&mut self, draft: &Self::Draft);
    /// Text form of every searchable field, each matched on its own.
    fn search_fields(&self) -> Vec<String>;

    fn matches(&self, term: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(term))
    }
}

impl Fixture for Color {
    type Draft = CreateColor;

    fn with_id(mut self, id: DbId) -> Self {
        self.id = id;
        self
    }

    fn from_draft(id: DbId, draft: &CreateColor) -> Self {
        color(&draft.name, &draft.hex).with_id(id)
    }

    fn apply_draft(&mut self, draft: &CreateColor) {
        self.name = draft.name.clone();
        self.hex = draft.hex.clone();
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.hex.clone()]
    }
}

impl Fixture for Typography {
    type Draft = CreateTypography;

    fn with_id(mut self, id: DbId) -> Self {
        self.id = id;
        self
    }

    fn from_draft(id: DbId, draft: &CreateTypography) -> Self {
        let mut preset = typography(&draft.name, &draft.font_family, draft.font_size).with_id(id);
        preset.apply_draft(draft);
        preset
    }

    fn apply_draft(&mut self, draft: &CreateTypography) {
        self.name = draft.name.clone();
        self.font_family = draft.font_family.clone();
        self.font_size = draft.font_size;
        self.line_height = draft.line_height;
        self.bold = draft.bold;
        self.italic = draft.italic;
        self.underline = draft.underline;
        self.strikethrough = draft.strikethrough;
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.font_family.clone(),
            self.font_size.to_string(),
            self.line_height.to_string(),
            self.bold.to_string(),
            self.italic.to_string(),
            self.underline.to_string(),
            self.strikethrough.to_string(),
        ]
    }
}

impl Fixture for Asset {
    type Draft = CreateAsset;

    fn with_id(mut self, id: DbId) -> Self {
        self.id = id;
        self
    }

    fn from_draft(id: DbId, draft: &CreateAsset) -> Self {
        asset(&draft.name, &draft.url).with_id(id)
    }

    fn apply_draft(&mut self, draft: &CreateAsset) {
        self.name = draft.name.clone();
        self.url = draft.url.clone();
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.url.clone()]
    }
}

// ---------------------------------------------------------------------------
// MemoryContext
// ---------------------------------------------------------------------------

/// [`ResourceContext`] over a `Vec`, with knobs for failures and for
/// holding responses back.
pub struct MemoryContext<E> {
    records: Mutex<Vec<E>>,
    next_id: Mutex<DbId>,
    fail_lists: AtomicBool,
    fail_mutations: AtomicBool,
    mutations: AtomicUsize,
    list_calls: AtomicUsize,
    /// List calls for these queries wait for a permit.
    gates: Mutex<HashMap<String, Arc<Semaphore>>>,
}

impl<E: Fixture> MemoryContext<E> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            fail_lists: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
            mutations: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Store `entity` under the next id, bypassing the mutation counter.
    pub fn insert(&self, entity: E) -> E {
        let id = self.allocate_id();
        let entity = entity.with_id(id);
        self.records.lock().unwrap().push(entity.clone());
        entity
    }

    pub fn all(&self) -> Vec<E> {
        self.records.lock().unwrap().clone()
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    /// Successful and failed create/update/delete calls.
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Hold list responses for `query` until the returned semaphore gets a
    /// permit.
    pub fn gate(&self, query: &str) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        self.gates
            .lock()
            .unwrap()
            .insert(query.to_string(), Arc::clone(&gate));
        gate
    }

    fn allocate_id(&self) -> DbId {
        let mut next = self.next_id.lock().unwrap();
        let id = *next;
        *next += 1;
        id
    }

    fn check_mutation(&self) -> Result<(), ClientError> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(())
    }
}

fn server_error() -> ClientError {
    ClientError::Api {
        status: 500,
        code: "INTERNAL_ERROR".into(),
        message: "An internal error occurred".into(),
    }
}

fn not_found(entity: &'static str, id: DbId) -> ClientError {
    ClientError::Api {
        status: 404,
        code: "NOT_FOUND".into(),
        message: format!("{entity} with id {id} not found"),
    }
}

#[async_trait]
impl<E: Fixture> ResourceContext for MemoryContext<E> {
    type Entity = E;
    type Draft = E::Draft;

    async fn list(&self, request: &PageRequest) -> Result<PageResult<E>, ClientError> {
        request.validate()?;
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let gate = request
            .query
            .as_ref()
            .and_then(|q| self.gates.lock().unwrap().get(q).cloned());
        if let Some(gate) = gate {
            let _permit = gate.acquire().await;
        }

        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(server_error());
        }

        let term = request.search_term();
        let matching: Vec<E> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|e| term.as_deref().map_or(true, |t| e.matches(t)))
            .cloned()
            .collect();

        let total = matching.len() as i64;
        let items = match request.offset().and_then(|o| usize::try_from(o).ok()) {
            Some(offset) => matching
                .into_iter()
                .skip(offset)
                .take(request.page_size as usize)
                .collect(),
            None => Vec::new(),
        };
        Ok(PageResult::new(items, total, request))
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<E>, ClientError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id() == id)
            .cloned())
    }

    async fn create(&self, draft: &E::Draft) -> Result<E, ClientError> {
        self.check_mutation()?;
        let entity = E::from_draft(self.allocate_id(), draft);
        self.records.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: DbId, draft: &E::Draft) -> Result<E, ClientError> {
        self.check_mutation()?;
        let mut records = self.records.lock().unwrap();
        let entity = records
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| not_found(E::KIND.entity_name(), id))?;
        entity.apply_draft(draft);
        Ok(entity.clone())
    }

    async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        self.check_mutation()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|e| e.id() != id);
        if records.len() == before {
            return Err(not_found(E::KIND.entity_name(), id));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FakeEditor
// ---------------------------------------------------------------------------

#[derive(Default)]
struct EditorState {
    selection: Vec<SelectedElement>,
    background: String,
    fills: Vec<(String, String)>,
    text_styles: Vec<(String, TextStyle)>,
    fonts: Vec<String>,
    inserted: Vec<(String, AssetKind)>,
}

/// Records every mutation the panels make.
#[derive(Default)]
pub struct FakeEditor {
    state: Mutex<EditorState>,
}

impl FakeEditor {
    pub fn select_element(&self, id: &str, kind: ElementKind, fill: &str) {
        self.state.lock().unwrap().selection.push(SelectedElement {
            id: id.into(),
            kind,
            fill: fill.into(),
            text_style: None,
        });
    }

    pub fn select_text(&self, id: &str, style: TextStyle) {
        self.state.lock().unwrap().selection.push(SelectedElement {
            id: id.into(),
            kind: ElementKind::Text,
            fill: "#000000".into(),
            text_style: Some(style),
        });
    }

    pub fn fills(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().fills.clone()
    }

    pub fn text_styles(&self) -> Vec<(String, TextStyle)> {
        self.state.lock().unwrap().text_styles.clone()
    }

    pub fn loaded_fonts(&self) -> Vec<String> {
        self.state.lock().unwrap().fonts.clone()
    }

    pub fn inserted(&self) -> Vec<(String, AssetKind)> {
        self.state.lock().unwrap().inserted.clone()
    }
}

#[async_trait]
impl CanvasEditor for FakeEditor {
    fn selected_elements(&self) -> Vec<SelectedElement> {
        self.state.lock().unwrap().selection.clone()
    }

    fn page_background(&self) -> String {
        self.state.lock().unwrap().background.clone()
    }

    fn set_page_background(&self, color: &str) {
        self.state.lock().unwrap().background = color.to_string();
    }

    fn set_fill(&self, element_id: &str, color: &str) {
        self.state
            .lock()
            .unwrap()
            .fills
            .push((element_id.to_string(), color.to_string()));
    }

    fn set_text_style(&self, element_id: &str, style: &TextStyle) {
        self.state
            .lock()
            .unwrap()
            .text_styles
            .push((element_id.to_string(), style.clone()));
    }

    async fn load_font(&self, font_family: &str) -> Result<(), ClientError> {
        self.state.lock().unwrap().fonts.push(font_family.to_string());
        Ok(())
    }

    fn insert_asset(&self, src: &str, kind: AssetKind) {
        self.state
            .lock()
            .unwrap()
            .inserted
            .push((src.to_string(), kind));
    }
}

// ---------------------------------------------------------------------------
// FakeUploader
// ---------------------------------------------------------------------------

/// Hands out `http://files.test/{file_name}` URLs.
#[derive(Default)]
pub struct FakeUploader {
    uploads: AtomicUsize,
    fail: AtomicBool,
}

impl FakeUploader {
    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Uploader for FakeUploader {
    async fn upload(&self, file: &UploadFile) -> Result<String, ClientError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        self.uploads.fetch_add(1, Ordering::SeqCst);
        Ok(format!("http://files.test/{}", file.file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(q: &str) -> PageRequest {
        PageRequest::new(1, 20).with_query(q)
    }

    #[tokio::test]
    async fn fields_are_matched_one_at_a_time() {
        let store = MemoryContext::new();
        store.insert(color("Red", "FF0000"));

        assert_eq!(store.list(&query("red")).await.unwrap().total, 1);
        assert_eq!(store.list(&query("1 red")).await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn typography_flags_match_as_true_and_false() {
        let store = MemoryContext::new();
        let mut heading = typography("Heading", "Inter", 32.0);
        heading.bold = true;
        store.insert(heading);
        store.insert(typography("Body", "Inter", 16.0));

        let page = store.list(&query("true")).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Heading");
        assert_eq!(store.list(&query("false")).await.unwrap().total, 2);
    }

    #[tokio::test]
    async fn page_beyond_any_offset_is_empty() {
        let store = MemoryContext::new();
        store.insert(color("Red", "FF0000"));

        let page = store.list(&PageRequest::new(i64::MAX, 100)).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
    }
}
