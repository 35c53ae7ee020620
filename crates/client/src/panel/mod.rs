//! Headless controllers for the brand kit side panels.
//!
//! [`Panel`] holds everything one panel needs: the incremental list, the
//! search debouncer, the create/edit modal with its form, and the pending
//! delete prompt. What differs between colors, typography and assets lives
//! in a [`PanelKind`]:
//!
//! - how the create form is seeded from the canvas selection
//! - how the form is validated and turned into a draft
//! - how a clicked item is applied to the canvas
//!
//! Mutating operations take `&mut self`, so a panel never runs two saves
//! or deletes at once. List operations take `&self` and may overlap.

pub mod asset;
pub mod color;
pub mod tabs;
pub mod typography;

use std::sync::Arc;

use async_trait::async_trait;
use brandkit_core::error::CoreError;
use brandkit_core::resource::{BrandEntity, ResourceKind};

use crate::config::ClientConfig;
use crate::context::ResourceContext;
use crate::debounce::SearchDebouncer;
use crate::editor::CanvasEditor;
use crate::error::ClientError;
use crate::list::{ListConsumer, LoadOutcome};

pub use asset::AssetPanel;
pub use color::ColorPanel;
pub use tabs::{BrandKitPanel, BrandKitTab};
pub use typography::TypographyPanel;

/// Load the next page once fewer than this many pixels remain below the
/// visible part of the grid.
pub const SCROLL_LOAD_THRESHOLD_PX: f64 = 200.0;

/// Scroll metrics of the grid container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollPosition {
    /// Pixels of content below the viewport.
    pub fn remaining(&self) -> f64 {
        self.scroll_height - self.scroll_top - self.client_height
    }

    pub fn near_end(&self) -> bool {
        self.remaining() < SCROLL_LOAD_THRESHOLD_PX
    }
}

/// Create/edit modal state.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal<E> {
    Closed,
    Creating,
    Editing(E),
}

impl<E> Modal<E> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    fn editing(&self) -> Option<&E> {
        match self {
            Modal::Editing(entity) => Some(entity),
            _ => None,
        }
    }
}

/// Per-collection behaviour of a [`Panel`].
#[async_trait]
pub trait PanelKind: Send + Sync + 'static {
    type Entity: BrandEntity;
    type Draft: Send + Sync;
    /// Editable modal state.
    type Form: Clone + Default + Send + Sync;

    /// Grid columns.
    const COLUMNS: usize;

    /// Form for a new item, seeded from the current canvas selection.
    fn seed_form(&self, editor: &dyn CanvasEditor) -> Self::Form;

    fn edit_form(&self, entity: &Self::Entity) -> Self::Form;

    /// Checks that must pass before anything is submitted.
    fn validate(&self, form: &Self::Form, editing: Option<&Self::Entity>) -> Result<(), CoreError>;

    /// Build the draft to submit, performing any side work (uploads).
    async fn draft(
        &self,
        form: &Self::Form,
        editing: Option<&Self::Entity>,
    ) -> Result<Self::Draft, ClientError>;

    /// Apply a clicked item to the canvas.
    async fn apply(&self, entity: &Self::Entity, editor: &dyn CanvasEditor);
}

/// One brand kit panel over context `C`.
pub struct Panel<K, C>
where
    K: PanelKind,
    C: ResourceContext<Entity = K::Entity, Draft = K::Draft>,
{
    kind: K,
    context: Arc<C>,
    list: ListConsumer<C>,
    debouncer: SearchDebouncer,
    editor: Arc<dyn CanvasEditor>,
    modal: Modal<K::Entity>,
    form: K::Form,
    pending_delete: Option<K::Entity>,
    last_error: Option<String>,
}

impl<K, C> Panel<K, C>
where
    K: PanelKind,
    C: ResourceContext<Entity = K::Entity, Draft = K::Draft>,
{
    pub fn new(kind: K, context: Arc<C>, editor: Arc<dyn CanvasEditor>, config: &ClientConfig) -> Self {
        Self {
            kind,
            list: ListConsumer::new(Arc::clone(&context), config.page_size),
            context,
            debouncer: SearchDebouncer::new(config.search_debounce),
            editor,
            modal: Modal::Closed,
            form: K::Form::default(),
            pending_delete: None,
            last_error: None,
        }
    }

    pub fn resource_kind() -> ResourceKind {
        <K::Entity as BrandEntity>::KIND
    }

    pub fn columns(&self) -> usize {
        K::COLUMNS
    }

    pub fn list(&self) -> &ListConsumer<C> {
        &self.list
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    // ---- grid ----

    /// Load the first page unless something is already loaded.
    pub async fn open(&self) -> Result<LoadOutcome, ClientError> {
        if self.list.pages_loaded().await > 0 {
            return Ok(LoadOutcome::Skipped);
        }
        self.list.load_more().await
    }

    /// Load the next page when the grid is scrolled close to its end.
    pub async fn on_scroll(&self, position: ScrollPosition) -> Result<LoadOutcome, ClientError> {
        if !position.near_end() {
            return Ok(LoadOutcome::Skipped);
        }
        self.list.load_more().await
    }

    /// Debounced search: only the latest keystroke of a burst queries.
    pub async fn search(&self, text: &str) -> Result<LoadOutcome, ClientError> {
        if !self.debouncer.settle().await {
            return Ok(LoadOutcome::Skipped);
        }
        self.list.set_query(text).await
    }

    /// Apply an item to the canvas.
    pub async fn select(&self, entity: &K::Entity) {
        self.kind.apply(entity, self.editor.as_ref()).await;
    }

    // ---- modal ----

    pub fn open_create(&mut self) {
        self.form = self.kind.seed_form(self.editor.as_ref());
        self.modal = Modal::Creating;
        self.last_error = None;
    }

    pub fn open_edit(&mut self, entity: K::Entity) {
        self.form = self.kind.edit_form(&entity);
        self.modal = Modal::Editing(entity);
        self.last_error = None;
    }

    pub fn cancel(&mut self) {
        self.modal = Modal::Closed;
        self.form = K::Form::default();
    }

    pub fn modal(&self) -> &Modal<K::Entity> {
        &self.modal
    }

    pub fn form(&self) -> &K::Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut K::Form {
        &mut self.form
    }

    /// Last failed save or delete, cleared when the modal is reopened.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Submit the open form.
    ///
    /// Validation failures are returned without any request being made. A
    /// failed request leaves the modal open with its form intact. On
    /// success the modal closes and the list restarts from page 1.
    pub async fn save(&mut self) -> Result<K::Entity, ClientError> {
        if !self.modal.is_open() {
            return Err(CoreError::Validation("No item is being edited".into()).into());
        }
        let editing = self.modal.editing().cloned();
        self.kind.validate(&self.form, editing.as_ref())?;

        match self.submit(editing.as_ref()).await {
            Ok(saved) => {
                tracing::info!(
                    kind = %Self::resource_kind(),
                    id = saved.id(),
                    name = %saved.name(),
                    updated = editing.is_some(),
                    "Brand kit item saved",
                );
                self.modal = Modal::Closed;
                self.form = K::Form::default();
                self.last_error = None;
                self.refresh().await;
                Ok(saved)
            }
            Err(err) => {
                tracing::error!(kind = %Self::resource_kind(), error = %err, "Failed to save brand kit item");
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    async fn submit(&self, editing: Option<&K::Entity>) -> Result<K::Entity, ClientError> {
        let draft = self.kind.draft(&self.form, editing).await?;
        match editing {
            Some(entity) => self.context.update(entity.id(), &draft).await,
            None => self.context.create(&draft).await,
        }
    }

    // ---- delete ----

    pub fn request_delete(&mut self, entity: K::Entity) {
        self.pending_delete = Some(entity);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<&K::Entity> {
        self.pending_delete.as_ref()
    }

    /// Delete the item awaiting confirmation.
    ///
    /// Returns `Ok(false)` when nothing was pending. On failure the prompt
    /// stays open.
    pub async fn confirm_delete(&mut self) -> Result<bool, ClientError> {
        let Some(entity) = self.pending_delete.clone() else {
            return Ok(false);
        };

        match self.context.delete(entity.id()).await {
            Ok(()) => {
                tracing::info!(kind = %Self::resource_kind(), id = entity.id(), "Brand kit item deleted");
                self.pending_delete = None;
                self.last_error = None;
                self.refresh().await;
                Ok(true)
            }
            Err(err) => {
                tracing::error!(
                    kind = %Self::resource_kind(),
                    id = entity.id(),
                    error = %err,
                    "Failed to delete brand kit item",
                );
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Restart the list after a mutation. The list records its own error.
    async fn refresh(&self) {
        if let Err(err) = self.list.reset().await {
            tracing::warn!(kind = %Self::resource_kind(), error = %err, "Failed to reload list");
        }
    }
}
