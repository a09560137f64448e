//!
//! Output history store format.
//!

///
/// Output history store format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    /// The published dashboard script, assigning the store to a global variable.
    Script,
    /// Plain JSON document.
    Json,
}

impl Format {
    /// The global variable the dashboard page reads the store from.
    pub const SCRIPT_VARIABLE: &'static str = "window.BENCHMARK_DATA";
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "script" => Ok(Self::Script),
            "json" => Ok(Self::Json),
            string => anyhow::bail!(
                "Unknown history store format `{string}`. Supported formats: {}",
                vec![Self::Script, Self::Json]
                    .into_iter()
                    .map(|element| element.to_string().to_lowercase())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Script => write!(f, "script"),
            Format::Json => write!(f, "json"),
        }
    }
}
