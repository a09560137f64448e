//!
//! The malformed history store error.
//!

///
/// The history store text does not describe a valid history store.
///
/// Raised when the text is not valid JSON, or when its shape does not match the
/// data model: missing `entries`, a non-numeric `date`, `entries` not mapping suite
/// names to lists, and so on.
///
#[derive(Debug, thiserror::Error)]
#[error("Malformed benchmark history store: {error}")]
pub struct MalformedStoreError {
    /// The underlying JSON error, including the line and column.
    #[from]
    pub error: serde_json::Error,
}
