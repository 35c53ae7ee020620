//! Brand colors.

use serde::{Deserialize, Serialize};
use crate::error::CoreError;
use crate::resource::{BrandEntity, ResourceKind};
use crate::types::{DbId, Timestamp};
use crate::validation;

use super::Update;

/// A row from the `colors` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: DbId,
    pub name: String,
    /// Six hex digits without a leading `#`.
    pub hex: String,
    pub created_at: Timestamp,
}

impl Color {
    /// CSS form of the color (`#RRGGBB`).
    pub fn css(&self) -> String {
        format!("#{}", self.hex)
    }
}

impl BrandEntity for Color {
    const KIND: ResourceKind = ResourceKind::Colors;

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

/// DTO for creating a color (and, wrapped in [`Update`], replacing one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateColor {
    pub name: String,
    pub hex: String,
}

impl CreateColor {
    /// Strip a leading `#` from `hex` and check the field rules.
    pub fn normalized(mut self) -> Result<Self, CoreError> {
        self.hex = validation::normalize_hex(&self.hex);
        validation::validate_color(&self.name, &self.hex)?;
        Ok(self)
    }
}

pub type UpdateColor = Update<CreateColor>;
