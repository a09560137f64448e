//!
//! One recorded benchmark run.
//!

pub mod bench;
pub mod commit;
pub mod tool;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::input::error::Error as InputError;

use self::bench::BenchResult;
use self::commit::Commit;
use self::tool::Tool;

///
/// One recorded benchmark run, tied to a commit and a timestamp.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The commit the run was recorded for.
    pub commit: Commit,
    /// When the run was recorded, in Unix epoch milliseconds.
    /// Not necessarily equal to the commit timestamp.
    pub date: u64,
    /// The tool that produced the results.
    pub tool: Tool,
    /// The measured metrics, in reporting order.
    pub benches: Vec<BenchResult>,

    /// Fields unknown to this model, kept as is.
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

impl Entry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(commit: Commit, date: u64, tool: Tool, benches: Vec<BenchResult>) -> Self {
        Self {
            commit,
            date,
            tool,
            benches,
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

    ///
    /// Returns the bench result with the given name.
    ///
    pub fn bench(&self, name: &str) -> Option<&BenchResult> {
        self.benches.iter().find(|bench| bench.name == name)
    }
}

impl TryFrom<&Path> for Entry {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let entry: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::EntryParsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(entry)
    }
}
