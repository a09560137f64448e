//!
//! Benchmark history input errors.
//!

use std::path::PathBuf;

use crate::model::history::error::MalformedStoreError;

///
/// Benchmark history file reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// The history store file is malformed.
    #[error("Parsing history store file {path:?}: {error}")]
    Parsing {
        /// The underlying malformed store error.
        error: MalformedStoreError,
        /// The path to the history store file.
        path: PathBuf,
    },
    /// The entry file is malformed.
    #[error("Parsing entry file {path:?}: {error}")]
    EntryParsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the entry file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Input file {path:?} is empty")]
    EmptyFile {
        /// The path to the input file.
        path: PathBuf,
    },
}
