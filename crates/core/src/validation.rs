//! Field rules for colors, typography presets and assets.
//!
//! Both the panels (before submitting) and the server (before writing)
//! run these checks, so a record that passes here is storable.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Six hex digits, no leading `#`.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("valid regex"));

/// MIME types accepted for uploaded assets.
pub const SUPPORTED_ASSET_TYPES: &[&str] = &["image/png", "image/jpeg", "image/jpg", "image/svg+xml"];

/// Message shown when a chosen file is not an accepted image.
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Please select a PNG, JPEG, or SVG file.";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Strip surrounding whitespace and a single leading `#`.
pub fn normalize_hex(input: &str) -> String {
    let trimmed = input.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed).to_string()
}

/// Whether `hex` (with or without `#`) is a six-digit hex color.
pub fn is_valid_hex(hex: &str) -> bool {
    HEX_RE.is_match(&normalize_hex(hex))
}

pub fn validate_color(name: &str, hex: &str) -> Result<(), CoreError> {
    require_non_empty("name", name)?;
    if !is_valid_hex(hex) {
        return Err(CoreError::Validation(format!(
            "hex must be six hex digits, got '{hex}'"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Typography
// ---------------------------------------------------------------------------

pub fn validate_typography(
    name: &str,
    font_family: &str,
    font_size: f64,
    line_height: f64,
) -> Result<(), CoreError> {
    require_non_empty("name", name)?;
    require_non_empty("fontFamily", font_family)?;
    require_positive("fontSize", font_size)?;
    require_positive("lineHeight", line_height)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

pub fn validate_asset(name: &str, url: &str) -> Result<(), CoreError> {
    require_non_empty("name", name)?;
    require_non_empty("url", url)?;
    Ok(())
}

/// How an asset is placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Svg,
}

impl AssetKind {
    /// SVG when the URL mentions `.svg` anywhere (case-insensitive).
    pub fn from_url(url: &str) -> Self {
        if url.to_lowercase().contains(".svg") {
            Self::Svg
        } else {
            Self::Image
        }
    }

    /// Kind for an accepted upload MIME type, `None` for anything else.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        if !SUPPORTED_ASSET_TYPES.contains(&content_type) {
            return None;
        }
        if content_type.contains("svg") {
            Some(Self::Svg)
        } else {
            Some(Self::Image)
        }
    }
}

/// File extension to store an accepted upload under.
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/svg+xml" => Some("svg"),
        _ => None,
    }
}

/// Default asset name for a chosen file: everything before the first `.`.
pub fn file_stem(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_positive(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive number, got {value}"
        )));
    }
    Ok(())
}
