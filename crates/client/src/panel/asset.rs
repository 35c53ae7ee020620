//! Assets panel.
//!
//! New files are uploaded through the panel's [`Uploader`] when the form is
//! saved; the record then stores the returned URL.

use std::sync::Arc;

use async_trait::async_trait;
use brandkit_core::error::CoreError;
use brandkit_core::validation::AssetKind;
use brandkit_core::models::asset::{Asset, CreateAsset};

use super::{Panel, PanelKind};
use crate::context::ResourceContext;
use crate::editor::CanvasEditor;
use crate::error::ClientError;
use crate::upload::{UploadFile, Uploader};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetForm {
    pub name: String,
    /// Newly chosen file, uploaded on save.
    pub file: Option<UploadFile>,
    /// URL of the existing file when editing.
    pub url: String,
}

/// Behaviour of the assets panel.
#[derive(Clone)]
pub struct AssetPanel {
    uploader: Arc<dyn Uploader>,
}

impl AssetPanel {
    pub fn new(uploader: Arc<dyn Uploader>) -> Self {
        Self { uploader }
    }
}

#[async_trait]
impl PanelKind for AssetPanel {
    type Entity = Asset;
    type Draft = CreateAsset;
    type Form = AssetForm;

    const COLUMNS: usize = 2;

    fn seed_form(&self, _editor: &dyn CanvasEditor) -> AssetForm {
        AssetForm::default()
    }

    fn edit_form(&self, asset: &Asset) -> AssetForm {
        AssetForm {
            name: asset.name.clone(),
            file: None,
            url: asset.url.clone(),
        }
    }

    /// A name, plus a chosen file unless an existing asset is being edited.
    fn validate(&self, form: &AssetForm, editing: Option<&Asset>) -> Result<(), CoreError> {
        if form.name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be empty".into()));
        }
        if form.file.is_none() && editing.is_none() {
            return Err(CoreError::Validation("Choose a file to upload".into()));
        }
        Ok(())
    }

    async fn draft(&self, form: &AssetForm, _editing: Option<&Asset>) -> Result<CreateAsset, ClientError> {
        let url = match &form.file {
            Some(file) => self.uploader.upload(file).await?,
            None => form.url.clone(),
        };
        let draft = CreateAsset {
            name: form.name.clone(),
            url,
        };
        Ok(draft.normalized()?)
    }

    async fn apply(&self, asset: &Asset, editor: &dyn CanvasEditor) {
        editor.insert_asset(&asset.url, asset.kind());
    }
}

impl<C> Panel<AssetPanel, C>
where
    C: ResourceContext<Entity = Asset, Draft = CreateAsset>,
{
    /// Attach a picked file to the open form.
    ///
    /// Only PNG, JPEG and SVG files are accepted. An empty name defaults to
    /// the file name up to its first `.`.
    pub fn choose_file(&mut self, file: UploadFile) -> Result<AssetKind, CoreError> {
        let kind = file.ensure_supported()?;
        let form = self.form_mut();
        if form.name.is_empty() {
            form.name = file.stem().to_string();
        }
        form.file = Some(file);
        Ok(kind)
    }
}
