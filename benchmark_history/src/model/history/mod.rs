//!
//! The benchmark history store.
//!

pub mod entry;
pub mod error;
pub mod suites;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::input::error::Error as InputError;
use crate::output::format::Format;

use self::entry::Entry;
use self::error::MalformedStoreError;
use self::suites::Suites;

///
/// The benchmark history store.
///
/// An append-only record of benchmark runs, grouped by suite name.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStore {
    /// The latest entry date, in Unix epoch milliseconds.
    pub last_update: u64,
    /// The benchmarked repository URL.
    pub repo_url: String,
    /// The entries of each suite, in chronological order.
    pub entries: Suites,

    /// Fields unknown to this model, kept as is.
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

impl HistoryStore {
    ///
    /// Creates an empty store, as it is before the first run.
    ///
    pub fn new(repo_url: String) -> Self {
        Self {
            last_update: 0,
            repo_url,
            entries: Suites::default(),
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
    /// Parses a store from either the dashboard script or a plain JSON document.
    ///
    pub fn load(source: &str) -> Result<Self, MalformedStoreError> {
        let source = source.trim();
        let json = source
            .strip_prefix(Format::SCRIPT_VARIABLE)
            .and_then(|assignment| assignment.trim_start().strip_prefix('='))
            .map(|value| value.trim().trim_end_matches(';'))
            .unwrap_or(source);
        let store: Self = serde_json::from_str(json)?;
        Ok(store)
    }

    ///
    /// Appends the entry to the end of the suite, creating the suite if it is new.
    ///
    /// Duplicate commits and out-of-order dates are accepted as is.
    ///
    pub fn append(&mut self, suite: &str, entry: Entry) {
        self.last_update = self.last_update.max(entry.date);
        self.entries.get_or_insert(suite).push(entry);
    }

    ///
    /// Drops the oldest entries of the suite, so that at most `max_items` remain.
    ///
    /// Returns the number of dropped entries.
    ///
    pub fn truncate(&mut self, suite: &str, max_items: usize) -> usize {
        match self.entries.get_mut(suite) {
            Some(entries) if entries.len() > max_items => {
                let excess = entries.len() - max_items;
                entries.drain(..excess);
                excess
            }
            _ => 0,
        }
    }

    ///
    /// Renders the store deterministically.
    ///
    pub fn serialize(&self, format: Format) -> String {
        let json = serde_json::to_string_pretty(self).expect("Always valid");
        match format {
            Format::Script => format!("{} = {json}\n", Format::SCRIPT_VARIABLE),
            Format::Json => format!("{json}\n"),
        }
    }

    ///
    /// Returns the entries of the suite, if it exists.
    ///
    pub fn suite(&self, name: &str) -> Option<&[Entry]> {
        self.entries.get(name)
    }

    ///
    /// Iterates over the suite names in order.
    ///
    pub fn suite_names(&self) -> impl Iterator<Item = &str> {
        self.entries.names()
    }

    ///
    /// Returns the most recently appended entry of the suite.
    ///
    pub fn latest(&self, suite: &str) -> Option<&Entry> {
        self.entries.get(suite).and_then(|entries| entries.last())
    }
}

impl std::str::FromStr for HistoryStore {
    type Err = MalformedStoreError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::load(string)
    }
}

impl TryFrom<&Path> for HistoryStore {
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
        Self::load(text.as_str()).map_err(|error| InputError::Parsing {
            error,
            path: path.to_path_buf(),
        })
    }
}
