//!
//! Benchmark history input.
//!

pub mod error;

use std::path::Path;
use std::path::PathBuf;

///
/// Resolves the entry file paths given on the command line.
///
/// A single directory is expanded to every JSON file below it, in path order.
/// Otherwise, the paths are returned as given.
///
pub fn resolve_entry_paths(input_paths: Vec<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
    if is_single_directory(input_paths.as_slice()) {
        return expand_directory(input_paths[0].as_path());
    }
    Ok(input_paths)
}

///
/// Whether the paths consist of exactly one directory.
///
pub fn is_single_directory(input_paths: &[PathBuf]) -> bool {
    matches!(input_paths, [directory] if directory.is_dir())
}

///
/// Collects every JSON file below the directory, sorted by path.
///
fn expand_directory(directory: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let resolution_pattern = format!("{}/**/*.json", directory.to_string_lossy());
    let mut paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    #[test]
    fn directory_is_expanded() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let nested = directory.path().join("nested");
        std::fs::create_dir_all(nested.as_path()).expect("Directory creation");
        for path in [
            directory.path().join("b.json"),
            nested.join("a.json"),
            directory.path().join("ignored.txt"),
        ] {
            std::fs::write(path, "{}").expect("File writing");
        }

        assert!(super::is_single_directory(&[directory.path().to_path_buf()]));
        let paths = super::resolve_entry_paths(vec![directory.path().to_path_buf()])
            .expect("Paths resolution");

        assert_eq!(
            paths,
            vec![directory.path().join("b.json"), nested.join("a.json")]
        );
    }

    #[test]
    fn files_are_kept_as_given() {
        let paths = vec![PathBuf::from("second.json"), PathBuf::from("first.json")];
        assert!(!super::is_single_directory(paths.as_slice()));

        let resolved = super::resolve_entry_paths(paths.clone()).expect("Paths resolution");

        assert_eq!(resolved, paths);
    }
}
