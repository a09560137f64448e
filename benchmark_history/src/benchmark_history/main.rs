//!
//! The benchmark history binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    arguments.validate()?;
    run(arguments)
}

///
/// Appends the entry files to the history store and writes it back.
///
/// Nothing is written if any entry file is malformed.
///
pub(crate) fn run(arguments: Arguments) -> anyhow::Result<()> {
    let quiet = arguments.quiet;

    let mut store = if arguments.store.exists() {
        benchmark_history::HistoryStore::try_from(arguments.store.as_path())?
    } else {
        let repo_url = arguments.repo_url.ok_or_else(|| {
            anyhow::anyhow!(
                "History store file {:?} does not exist. Use `--repo-url` to create a new one.",
                arguments.store
            )
        })?;
        if !quiet {
            eprintln!(
                "{} a new history store {:?} for {repo_url}",
                "Creating".bright_green(),
                arguments.store
            );
        }
        benchmark_history::HistoryStore::new(repo_url)
    };

    let from_directory =
        benchmark_history::input::is_single_directory(arguments.input_paths.as_slice());
    let mut entries = Vec::with_capacity(arguments.input_paths.len());
    for path in benchmark_history::input::resolve_entry_paths(arguments.input_paths)? {
        match benchmark_history::Entry::try_from(path.as_path()) {
            Ok(entry) => entries.push(entry),
            Err(benchmark_history::InputError::EmptyFile { path }) => {
                if !quiet {
                    eprintln!(
                        "{} Entry file {path:?} is empty and will be skipped.",
                        "Warning:".bright_yellow()
                    );
                }
                continue;
            }
            Err(error) => Err(error)?,
        }
    }
    if from_directory {
        entries.sort_by_key(|entry| entry.date);
    }

    let appended = entries.len();
    for entry in entries.into_iter() {
        if !quiet {
            let commit = entry.commit.id.get(..7).unwrap_or(entry.commit.id.as_str());
            eprintln!(
                "{} {commit} ({} results, {}) to `{}`",
                "Appending".bright_green(),
                entry.benches.len(),
                entry.tool,
                arguments.suite
            );
        }
        store.append(arguments.suite.as_str(), entry);
    }

    if let Some(max_items) = arguments.max_items_in_chart {
        let dropped = store.truncate(arguments.suite.as_str(), max_items);
        if dropped > 0 && !quiet {
            eprintln!(
                "{} {dropped} oldest entries of `{}`",
                "Dropping".bright_yellow(),
                arguments.suite
            );
        }
    }

    let output_path = arguments.output_path.unwrap_or(arguments.store);
    let output = benchmark_history::Output::from((&store, arguments.output_format));
    output.write_to_file(output_path.as_path())?;

    if !quiet {
        let total = store
            .suite(arguments.suite.as_str())
            .map(|entries| entries.len())
            .unwrap_or_default();
        eprintln!(
            "{} {appended} entries, `{}` now has {total}, written to {output_path:?}",
            "Appended".bright_white(),
            arguments.suite
        );
    }

    Ok(())
}
