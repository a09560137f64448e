//!
//! The benchmark tool a run was produced by.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The benchmark tool a run was produced by.
///
/// Determines the comparison semantics of the run's metrics.
/// Unknown tool names are accepted and written back unchanged.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tool {
    /// `cargo bench` output.
    Cargo,
    /// `go test -bench` output.
    Go,
    /// Benchmark.js output.
    BenchmarkJs,
    /// Luau benchmark output.
    BenchmarkLuau,
    /// pytest-benchmark output.
    Pytest,
    /// Google Benchmark output.
    GoogleCpp,
    /// Catch2 output.
    Catch2,
    /// BenchmarkTools.jl output.
    Julia,
    /// JMH output.
    Jmh,
    /// BenchmarkDotNet output.
    BenchmarkDotNet,
    /// Custom metrics where a bigger value is an improvement.
    CustomBiggerIsBetter,
    /// Custom metrics where a smaller value is an improvement.
    CustomSmallerIsBetter,
    /// A tool name not known to this model.
    Other(UnknownTool),
}

///
/// A tool name not known to this model.
///
/// Only built by parsing a name, so it never holds the name of a known tool.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTool(String);

impl UnknownTool {
    ///
    /// The tool name.
    ///
    pub fn name(&self) -> &str {
        self.0.as_str()
    }
}

impl Tool {
    ///
    /// Whether a bigger metric value is an improvement.
    ///
    pub fn is_bigger_better(&self) -> bool {
        matches!(
            self,
            Self::BenchmarkJs | Self::BenchmarkLuau | Self::CustomBiggerIsBetter
        )
    }

    ///
    /// Whether a smaller metric value is an improvement.
    ///
    pub fn is_smaller_better(&self) -> bool {
        !self.is_bigger_better()
    }
}

impl From<String> for Tool {
    fn from(string: String) -> Self {
        match string.as_str() {
            "cargo" => Self::Cargo,
            "go" => Self::Go,
            "benchmarkjs" => Self::BenchmarkJs,
            "benchmarkluau" => Self::BenchmarkLuau,
            "pytest" => Self::Pytest,
            "googlecpp" => Self::GoogleCpp,
            "catch2" => Self::Catch2,
            "julia" => Self::Julia,
            "jmh" => Self::Jmh,
            "benchmarkdotnet" => Self::BenchmarkDotNet,
            "customBiggerIsBetter" => Self::CustomBiggerIsBetter,
            "customSmallerIsBetter" => Self::CustomSmallerIsBetter,
            _ => Self::Other(UnknownTool(string)),
        }
    }
}

impl From<Tool> for String {
    fn from(tool: Tool) -> Self {
        match tool {
            Tool::Other(UnknownTool(name)) => name,
            tool => tool.to_string(),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cargo => write!(f, "cargo"),
            Self::Go => write!(f, "go"),
            Self::BenchmarkJs => write!(f, "benchmarkjs"),
            Self::BenchmarkLuau => write!(f, "benchmarkluau"),
            Self::Pytest => write!(f, "pytest"),
            Self::GoogleCpp => write!(f, "googlecpp"),
            Self::Catch2 => write!(f, "catch2"),
            Self::Julia => write!(f, "julia"),
            Self::Jmh => write!(f, "jmh"),
            Self::BenchmarkDotNet => write!(f, "benchmarkdotnet"),
            Self::CustomBiggerIsBetter => write!(f, "customBiggerIsBetter"),
            Self::CustomSmallerIsBetter => write!(f, "customSmallerIsBetter"),
            Self::Other(tool) => write!(f, "{}", tool.name()),
        }
    }
}
