//!
//! The commit author or committer.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The commit author or committer.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The e-mail address.
    pub email: String,
    /// The full name.
    pub name: String,
    /// The hosting service account name.
    pub username: String,

    /// Fields unknown to this model, kept as is.
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

impl User {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(email: String, name: String, username: String) -> Self {
        Self {
            email,
            name,
            username,
            other: serde_json::Map::new(),
        }
    }

    ///
    /// Fields unknown to this model, as loaded.
    ///
    /// Only deserialization fills them, so they never share a name with a known field.
    ///
    pub fn other(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.other
    }
}
