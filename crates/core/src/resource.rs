//! The three brand kit collections and the minimal contract every record
//! stored in them satisfies.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// A managed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Colors,
    Typography,
    Assets,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Colors, Self::Typography, Self::Assets];

    /// Path segment of the collection (`/colors`, `/typography`, `/assets`).
    pub fn path(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Typography => "typography",
            Self::Assets => "assets",
        }
    }

    /// Singular entity name used in error messages and logs.
    pub fn entity_name(self) -> &'static str {
        match self {
            Self::Colors => "Color",
            Self::Typography => "Typography",
            Self::Assets => "Asset",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Required fields of any record in a brand kit collection.
///
/// Embedders may carry richer record types as long as they expose these.
pub trait BrandEntity: Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    fn id(&self) -> DbId;

    fn name(&self) -> &str;

    fn created_at(&self) -> Timestamp;
}
