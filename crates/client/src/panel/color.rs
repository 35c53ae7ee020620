//! Colors panel.

use async_trait::async_trait;
use brandkit_core::error::CoreError;
use brandkit_core::validation;
use brandkit_core::models::color::{Color, CreateColor};

use super::PanelKind;
use crate::editor::{color_to_hex, CanvasEditor};
use crate::error::ClientError;

/// Fallback for a new color when nothing usable is selected.
const DEFAULT_HEX: &str = "000000";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorForm {
    pub name: String,
    /// Hex digits, `#` optional.
    pub hex: String,
}

/// Behaviour of the colors panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorPanel;

#[async_trait]
impl PanelKind for ColorPanel {
    type Entity = Color;
    type Draft = CreateColor;
    type Form = ColorForm;

    const COLUMNS: usize = 3;

    /// Fill of the first selected element, else the page background unless
    /// it is an image.
    fn seed_form(&self, editor: &dyn CanvasEditor) -> ColorForm {
        let source = match editor.selected_elements().into_iter().next() {
            Some(element) => Some(element.fill),
            None => Some(editor.page_background()).filter(|bg| !bg.starts_with("http")),
        };

        ColorForm {
            name: String::new(),
            hex: source
                .as_deref()
                .and_then(color_to_hex)
                .unwrap_or_else(|| DEFAULT_HEX.to_string()),
        }
    }

    fn edit_form(&self, color: &Color) -> ColorForm {
        ColorForm {
            name: color.name.clone(),
            hex: color.hex.clone(),
        }
    }

    fn validate(&self, form: &ColorForm, _editing: Option<&Color>) -> Result<(), CoreError> {
        validation::validate_color(&form.name, &form.hex)
    }

    async fn draft(&self, form: &ColorForm, _editing: Option<&Color>) -> Result<CreateColor, ClientError> {
        let draft = CreateColor {
            name: form.name.clone(),
            hex: form.hex.clone(),
        };
        Ok(draft.normalized()?)
    }

    /// Fill every selected element, or the page background when nothing is
    /// selected.
    async fn apply(&self, color: &Color, editor: &dyn CanvasEditor) {
        let css = color.css();
        let selected = editor.selected_elements();
        if selected.is_empty() {
            editor.set_page_background(&css);
            return;
        }
        for element in &selected {
            editor.set_fill(&element.id, &css);
        }
    }
}
