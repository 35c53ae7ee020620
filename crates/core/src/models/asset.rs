//! Image and SVG assets.

use serde::{Deserialize, Serialize};
use crate::error::CoreError;
use crate::resource::{BrandEntity, ResourceKind};
use crate::types::{DbId, Timestamp};
use crate::validation::{self, AssetKind};

use super::Update;

/// A row from the `assets` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    /// Where the stored file can be fetched from.
    pub url: String,
    pub created_at: Timestamp,
}

impl Asset {
    pub fn kind(&self) -> AssetKind {
        AssetKind::from_url(&self.url)
    }
}

impl BrandEntity for Asset {
    const KIND: ResourceKind = ResourceKind::Assets;

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

/// DTO for creating an asset record once its file has been uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAsset {
    pub name: String,
    pub url: String,
}

impl CreateAsset {
    pub fn normalized(self) -> Result<Self, CoreError> {
        validation::validate_asset(&self.name, &self.url)?;
        Ok(self)
    }
}

pub type UpdateAsset = Update<CreateAsset>;
