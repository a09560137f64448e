//!
//! The commit a benchmark run was recorded for.
//!

pub mod user;

use serde::Deserialize;
use serde::Serialize;

use self::user::User;

///
/// The commit a benchmark run was recorded for.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit author.
    pub author: User,
    /// The commit committer.
    pub committer: User,
    /// Whether the commit was distinct within its push.
    pub distinct: bool,
    /// The commit hash.
    pub id: String,
    /// The commit message.
    pub message: String,
    /// The commit timestamp, ISO-8601 with a timezone offset.
    pub timestamp: String,
    /// The tree hash.
    pub tree_id: String,
    /// The commit page URL.
    pub url: String,

    /// Fields unknown to this model, kept as is.
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

impl Commit {
    ///
    /// Fields unknown to this model, as loaded.
    ///
    /// Only deserialization fills them, so they never share a name with a known field.
    ///
    pub fn other(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.other
    }
}
