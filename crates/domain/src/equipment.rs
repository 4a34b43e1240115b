//! Equipment — a piece of workout equipment that can be installed in a park.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BarzError, ValidationError};
use crate::id::EquipmentId;

/// A row of the `equipment` table, as returned by the remote store.
///
/// Columns the store adds on its own (`created_at`, ...) are kept in
/// `extra` so responses can echo the row unchanged. Every column but `id`
/// may be null or absent: the store owns the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields required to insert a new equipment row. The store assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEquipment {
    pub name: String,
    pub description: String,
    pub icon_name: String,
}

impl NewEquipment {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BarzError::Validation`] when `name` or `icon_name` is blank.
    pub fn validate(&self) -> Result<(), BarzError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        if self.icon_name.trim().is_empty() {
            return Err(ValidationError::EmptyField("icon_name").into());
        }
        Ok(())
    }
}

/// A partial update keyed on `id`.
///
/// Only the fields that are `Some` are written; absent fields keep their
/// stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentPatch {
    #[serde(skip)]
    pub id: EquipmentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
}

impl EquipmentPatch {
    /// Start an empty patch for the row `id`.
    #[must_use]
    pub fn new(id: EquipmentId) -> Self {
        Self {
            id,
            name: None,
            description: None,
            icon_name: None,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn icon_name(mut self, icon_name: impl Into<String>) -> Self {
        self.icon_name = Some(icon_name.into());
        self
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BarzError::Validation`] when no field is set, or when a
    /// present `name`/`icon_name` is blank.
    pub fn validate(&self) -> Result<(), BarzError> {
        if self.name.is_none() && self.description.is_none() && self.icon_name.is_none() {
            return Err(ValidationError::EmptyPatch.into());
        }
        if self.name.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(ValidationError::EmptyField("name").into());
        }
        if self.icon_name.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(ValidationError::EmptyField("icon_name").into());
        }
        Ok(())
    }
}
