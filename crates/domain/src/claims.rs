//! Claims carried by a decoded bearer token.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The payload of a decoded token, kept as an open JSON object.
///
/// No claim is required: the token only has to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    #[must_use]
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// The `sub` claim, when present and a string.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.get_str("sub")
    }

    /// Look up a string-valued claim.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }
}
