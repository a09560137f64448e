//!
//! Benchmark history output.
//!

pub mod format;

use std::path::Path;

use crate::model::history::HistoryStore;

use self::format::Format;

///
/// A serialized history store, ready to be written.
///
#[derive(Debug)]
pub struct Output {
    /// The serialized content.
    pub content: String,
}

impl Output {
    ///
    /// Writes the serialized store to a file, replacing its previous content.
    ///
    pub fn write_to_file(self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|error| {
                    anyhow::anyhow!("History store directory {parent:?} creating: {error}")
                })?;
            }
        }
        std::fs::write(path, self.content)
            .map_err(|error| anyhow::anyhow!("History store file {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl From<(&HistoryStore, Format)> for Output {
    fn from((store, format): (&HistoryStore, Format)) -> Self {
        Self {
            content: store.serialize(format),
        }
    }
}
