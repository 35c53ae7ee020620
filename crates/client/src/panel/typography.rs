//! Fonts (typography presets) panel.

use async_trait::async_trait;
use brandkit_core::error::CoreError;
use brandkit_core::validation;
use brandkit_core::models::typography::{CreateTypography, Typography};

use super::PanelKind;
use crate::editor::{CanvasEditor, ElementKind, TextStyle};
use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub struct TypographyForm {
    pub name: String,
    pub font_family: String,
    pub font_size: f64,
    pub line_height: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl Default for TypographyForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            font_family: "Arial".to_string(),
            font_size: 16.0,
            line_height: 1.2,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
        }
    }
}

impl From<&TextStyle> for TypographyForm {
    fn from(style: &TextStyle) -> Self {
        Self {
            name: String::new(),
            font_family: style.font_family.clone(),
            font_size: style.font_size.floor(),
            line_height: style.line_height,
            bold: style.font_weight == "bold",
            italic: style.font_style == "italic",
            underline: style.text_decoration.contains("underline"),
            strikethrough: style.text_decoration.contains("line-through"),
        }
    }
}

/// CSS text style for a preset.
pub fn text_style(preset: &Typography) -> TextStyle {
    TextStyle {
        font_family: preset.font_family.clone(),
        font_size: preset.font_size,
        line_height: preset.line_height,
        font_weight: if preset.bold { "bold" } else { "normal" }.to_string(),
        font_style: if preset.italic { "italic" } else { "normal" }.to_string(),
        text_decoration: text_decoration(preset.underline, preset.strikethrough),
    }
}

fn text_decoration(underline: bool, strikethrough: bool) -> String {
    format!(
        "{} {}",
        if underline { "underline" } else { "" },
        if strikethrough { "line-through" } else { "" }
    )
    .trim()
    .to_string()
}

/// Behaviour of the fonts panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypographyPanel;

#[async_trait]
impl PanelKind for TypographyPanel {
    type Entity = Typography;
    type Draft = CreateTypography;
    type Form = TypographyForm;

    const COLUMNS: usize = 3;

    /// Styling of the first selected element when it is text.
    fn seed_form(&self, editor: &dyn CanvasEditor) -> TypographyForm {
        editor
            .selected_elements()
            .first()
            .filter(|element| element.kind == ElementKind::Text)
            .and_then(|element| element.text_style.as_ref())
            .map(TypographyForm::from)
            .unwrap_or_default()
    }

    fn edit_form(&self, preset: &Typography) -> TypographyForm {
        TypographyForm {
            name: preset.name.clone(),
            font_family: preset.font_family.clone(),
            font_size: preset.font_size,
            line_height: preset.line_height,
            bold: preset.bold,
            italic: preset.italic,
            underline: preset.underline,
            strikethrough: preset.strikethrough,
        }
    }

    fn validate(&self, form: &TypographyForm, _editing: Option<&Typography>) -> Result<(), CoreError> {
        validation::validate_typography(
            &form.name,
            &form.font_family,
            form.font_size,
            form.line_height,
        )
    }

    async fn draft(
        &self,
        form: &TypographyForm,
        _editing: Option<&Typography>,
    ) -> Result<CreateTypography, ClientError> {
        let draft = CreateTypography {
            name: form.name.clone(),
            font_family: form.font_family.clone(),
            font_size: form.font_size,
            line_height: form.line_height,
            bold: form.bold,
            italic: form.italic,
            underline: form.underline,
            strikethrough: form.strikethrough,
        };
        Ok(draft.normalized()?)
    }

    /// Load the family, then style every selected text element.
    async fn apply(&self, preset: &Typography, editor: &dyn CanvasEditor) {
        if let Err(err) = editor.load_font(&preset.font_family).await {
            tracing::warn!(font_family = %preset.font_family, error = %err, "Font failed to load");
        }

        let style = text_style(preset);
        for element in editor.selected_elements() {
            if element.kind == ElementKind::Text {
                editor.set_text_style(&element.id, &style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;

    use super::*;
    use crate::config::ClientConfig;
    use crate::panel::{Modal, Panel};
    use crate::testing::{typography, FakeEditor, MemoryContext};

    type FontsPanel = Panel<TypographyPanel, MemoryContext<Typography>>;

    fn panel_with(context: Arc<MemoryContext<Typography>>, editor: Arc<FakeEditor>) -> FontsPanel {
        Panel::new(TypographyPanel, context, editor, &ClientConfig::default())
    }

    fn selected_text_style() -> TextStyle {
        TextStyle {
            font_family: "Lora".into(),
            font_size: 23.7,
            line_height: 1.5,
            font_weight: "bold".into(),
            font_style: "italic".into(),
            text_decoration: "underline line-through".into(),
        }
    }

    #[test]
    fn decoration_is_trimmed() {
        assert_eq!(text_decoration(true, true), "underline line-through");
        assert_eq!(text_decoration(true, false), "underline");
        assert_eq!(text_decoration(false, true), "line-through");
        assert_eq!(text_decoration(false, false), "");
    }

    #[test]
    fn text_style_maps_flags_to_css() {
        let mut preset = typography("Heading", "Roboto", 32.0);
        preset.bold = true;
        let style = text_style(&preset);
        assert_eq!(style.font_weight, "bold");
        assert_eq!(style.font_style, "normal");
        assert_eq!(style.text_decoration, "");
        assert_eq!(style.font_size, 32.0);
    }

    #[tokio::test]
    async fn create_seeds_from_selected_text() {
        let editor = Arc::new(FakeEditor::default());
        editor.select_text("t1", selected_text_style());
        let mut panel = panel_with(Arc::new(MemoryContext::new()), editor);

        panel.open_create();
        let form = panel.form();
        assert_eq!(form.font_family, "Lora");
        assert_eq!(form.font_size, 23.0);
        assert!(form.bold && form.italic && form.underline && form.strikethrough);
        assert!(form.name.is_empty());
    }

    #[tokio::test]
    async fn create_without_text_selection_uses_defaults() {
        let editor = Arc::new(FakeEditor::default());
        editor.select_element("shape", ElementKind::Shape, "#fff");
        let mut panel = panel_with(Arc::new(MemoryContext::new()), editor);

        panel.open_create();
        assert_eq!(panel.form(), &TypographyForm::default());
    }

    #[tokio::test]
    async fn missing_family_blocks_submission() {
        let context = Arc::new(MemoryContext::new());
        let mut panel = panel_with(Arc::clone(&context), Arc::new(FakeEditor::default()));

        panel.open_create();
        panel.form_mut().name = "Body".into();
        panel.form_mut().font_family.clear();

        assert_matches!(panel.save().await, Err(ClientError::Core(CoreError::Validation(_))));
        assert_eq!(context.mutation_count(), 0);
    }

    #[tokio::test]
    async fn edit_updates_existing_preset() {
        let context = MemoryContext::new();
        context.insert(typography("Body", "Inter", 16.0));
        let context = Arc::new(context);
        let existing = context.all()[0].clone();
        let mut panel = panel_with(Arc::clone(&context), Arc::new(FakeEditor::default()));

        panel.open_edit(existing.clone());
        assert_eq!(panel.form().font_family, "Inter");
        panel.form_mut().italic = true;
        let saved = panel.save().await.unwrap();

        assert_eq!(saved.id, existing.id);
        assert!(saved.italic);
        assert_eq!(panel.modal(), &Modal::Closed);
        assert!(context.all()[0].italic);
    }

    #[tokio::test]
    async fn select_loads_font_and_styles_only_text() {
        let editor = Arc::new(FakeEditor::default());
        editor.select_text("t1", selected_text_style());
        editor.select_element("img", ElementKind::Image, "#000");
        let panel = panel_with(Arc::new(MemoryContext::new()), Arc::clone(&editor));

        let mut preset = typography("Caption", "Inter", 12.0);
        preset.underline = true;
        panel.select(&preset).await;

        assert_eq!(editor.loaded_fonts(), vec!["Inter".to_string()]);
        let styles = editor.text_styles();
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].0, "t1");
        assert_eq!(styles[0].1.text_decoration, "underline");
        assert_eq!(styles[0].1.font_weight, "normal");
    }
}
