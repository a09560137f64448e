//!
//! A single named metric measured within a benchmark run.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A single named metric measured within a benchmark run.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchResult {
    /// The metric name, unique within its entry.
    pub name: String,
    /// The measured value.
    /// Kept as a JSON number so that integers are not rewritten as floats.
    pub value: serde_json::Number,
    /// The measurement unit.
    pub unit: String,
    /// The uncertainty or variance annotation, e.g. `± 3`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// The free-form tooltip text, possibly multi-line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,

    /// Fields unknown to this model, kept as is.
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

impl BenchResult {
    ///
    /// A shortcut constructor for results without annotations.
    ///
    pub fn new<N>(name: String, value: N, unit: String) -> Self
    where
        N: Into<serde_json::Number>,
    {
        Self {
            name,
            value: value.into(),
            unit,
            range: None,
            extra: None,
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
    /// Sets the range annotation.
    ///
    pub fn with_range(mut self, range: String) -> Self {
        self.range = Some(range);
        self
    }

    ///
    /// Sets the tooltip text.
    ///
    pub fn with_extra(mut self, extra: String) -> Self {
        self.extra = Some(extra);
        self
    }
}
