//! User — an account known to the identity provider and mirrored in the store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BarzError, ValidationError};
use crate::id::UserId;

/// A row of the `users` table.
///
/// `role` is stored as given; it carries no authorization meaning here.
/// Every column but `id` may be null or absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub auth0_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields required to insert a new user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub auth0_id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl NewUser {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BarzError::Validation`] when `auth0_id` or `name` is blank
    /// or `email` is malformed.
    pub fn validate(&self) -> Result<(), BarzError> {
        if self.auth0_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("auth0_id").into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        validate_email(&self.email)
    }
}

/// A partial update keyed on `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(skip)]
    pub id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth0_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserPatch {
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            auth0_id: None,
            email: None,
            name: None,
            role: None,
        }
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Check domain invariants on the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns [`BarzError::Validation`] when no field is set or a present
    /// field is invalid.
    pub fn validate(&self) -> Result<(), BarzError> {
        if self.auth0_id.is_none()
            && self.email.is_none()
            && self.name.is_none()
            && self.role.is_none()
        {
            return Err(ValidationError::EmptyPatch.into());
        }
        if self.auth0_id.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(ValidationError::EmptyField("auth0_id").into());
        }
        if self.name.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(ValidationError::EmptyField("name").into());
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), BarzError> {
    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail.into()),
    }
}
