//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct matching the stored record (also
//!   `sqlx::FromRow` with the `sqlx` feature)
//! - A `Deserialize` create DTO holding the editable fields
//!
//! Updates replace every editable field, so they reuse the create DTO
//! wrapped in [`Update`].

use serde::{Deserialize, Serialize};
use crate::types::DbId;

pub mod asset;
pub mod color;
pub mod typography;

/// Update payload: the full editable field set plus the record id.
///
/// The id is optional on the wire because the path carries it too; when
/// present it must agree with the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Update<T> {
    pub fn new(id: DbId, fields: T) -> Self {
        Self {
            id: Some(id),
            fields,
        }
    }
}
