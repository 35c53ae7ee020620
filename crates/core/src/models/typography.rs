//! Typography presets.

use serde::{Deserialize, Serialize};
use crate::error::CoreError;
use crate::resource::{BrandEntity, ResourceKind};
use crate::types::{DbId, Timestamp};
use crate::validation;

use super::Update;

/// A row from the `typography` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub id: DbId,
    pub name: String,
    pub font_family: String,
    pub font_size: f64,
    pub line_height: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub created_at: Timestamp,
}

impl BrandEntity for Typography {
    const KIND: ResourceKind = ResourceKind::Typography;

    fn id(&self) -> DbId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// DTO for creating a typography preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTypography {
    pub name: String,
    pub font_family: String,
    pub font_size: f64,
    pub line_height: f64,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub strikethrough: bool,
}

impl CreateTypography {
    pub fn normalized(self) -> Result<Self, CoreError> {
        validation::validate_typography(
            &self.name,
            &self.font_family,
            self.font_size,
            self.line_height,
        )?;
        Ok(self)
    }
}

pub type UpdateTypography = Update<CreateTypography>;
