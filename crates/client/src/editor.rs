//! The canvas editor the panels read selections from and apply items to.
//!
//! The host application implements [`CanvasEditor`]; the panels only need
//! the handful of queries and mutations below.

use async_trait::async_trait;
use brandkit_core::validation::AssetKind;

use crate::error::ClientError;

/// Kind of a canvas element, as far as the panels care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    Image,
    Svg,
    Shape,
}

/// Text styling of a text element, in CSS terms.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub line_height: f64,
    /// `bold` or `normal`.
    pub font_weight: String,
    /// `italic` or `normal`.
    pub font_style: String,
    /// Space-separated `underline` / `line-through`, empty for none.
    pub text_decoration: String,
}

/// A currently selected element.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedElement {
    pub id: String,
    pub kind: ElementKind,
    /// CSS color of the element fill.
    pub fill: String,
    /// Present for text elements.
    pub text_style: Option<TextStyle>,
}

#[async_trait]
pub trait CanvasEditor: Send + Sync {
    /// Selected elements in selection order.
    fn selected_elements(&self) -> Vec<SelectedElement>;

    /// Background of the active page: a CSS color or an image URL.
    fn page_background(&self) -> String;

    fn set_page_background(&self, color: &str);

    fn set_fill(&self, element_id: &str, color: &str);

    fn set_text_style(&self, element_id: &str, style: &TextStyle);

    /// Make a font family available before text is styled with it.
    async fn load_font(&self, font_family: &str) -> Result<(), ClientError>;

    /// Add an image or SVG to the active page.
    fn insert_asset(&self, src: &str, kind: AssetKind);
}

// ---------------------------------------------------------------------------
// Color conversion
// ---------------------------------------------------------------------------

/// Convert a CSS color to six lower-case hex digits (no `#`).
///
/// Understands `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(...)`, `rgba(...)` and
/// a few named colors. Alpha is dropped. Returns `None` for anything else,
/// including image URLs.
pub fn color_to_hex(color: &str) -> Option<String> {
    let color = color.trim().to_lowercase();

    if let Some(digits) = color.strip_prefix('#') {
        return expand_hex(digits);
    }

    if let Some(args) = color
        .strip_prefix("rgba(")
        .or_else(|| color.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels: Vec<&str> = args.split(',').map(str::trim).collect();
        if !(3..=4).contains(&channels.len()) {
            return None;
        }
        let mut hex = String::with_capacity(6);
        for channel in &channels[..3] {
            let value: f64 = channel.parse().ok()?;
            if !(0.0..=255.0).contains(&value) {
                return None;
            }
            hex.push_str(&format!("{:02x}", value.round() as u8));
        }
        return Some(hex);
    }

    let named = match color.as_str() {
        "black" => "000000",
        "white" => "ffffff",
        "red" => "ff0000",
        "lime" => "00ff00",
        "green" => "008000",
        "blue" => "0000ff",
        "yellow" => "ffff00",
        "orange" => "ffa500",
        "purple" => "800080",
        "gray" | "grey" => "808080",
        _ => return None,
    };
    Some(named.to_string())
}

fn expand_hex(digits: &str) -> Option<String> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => Some(digits.chars().flat_map(|c| [c, c]).collect()),
        6 => Some(digits.to_string()),
        8 => Some(digits[..6].to_string()),
        _ => None,
    }
}
