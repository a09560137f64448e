//!
//! The benchmark history arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark history arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Entry files to append, in the given order.
    /// If only one path is provided and it is a directory, every JSON file below it is
    /// appended in the order of the entry `date`, whatever the file names are.
    pub input_paths: Vec<PathBuf>,

    /// History store file to append to.
    /// Created if it does not exist, which requires `--repo-url`.
    #[arg(long)]
    pub store: PathBuf,

    /// Repository URL of a newly created history store.
    #[arg(long)]
    pub repo_url: Option<String>,

    /// Suite to append the entries to.
    #[arg(long)]
    pub suite: String,

    /// Maximum number of entries kept in the suite; the oldest ones are dropped.
    #[arg(long)]
    pub max_items_in_chart: Option<usize>,

    /// History store output format: `script` or `json`.
    #[arg(long, default_value_t = benchmark_history::Format::Script)]
    pub output_format: benchmark_history::Format,

    /// Output file. Defaults to the history store file.
    #[arg(long)]
    pub output_path: Option<PathBuf>,
}

impl Arguments {
    ///
    /// Validates the command line arguments.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.input_paths.is_empty() {
            anyhow::bail!("No entry files provided. Pass entry files or a directory with them.");
        }
        if self.suite.is_empty() {
            anyhow::bail!("Suite name must not be empty.");
        }
        if self.max_items_in_chart == Some(0) {
            anyhow::bail!("`--max-items-in-chart` must be positive.");
        }
        Ok(())
    }
}
