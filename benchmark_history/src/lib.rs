//!
//! The benchmark history library.
//!

pub mod input;
pub mod model;
pub mod output;

pub use crate::input::error::Error as InputError;
pub use crate::model::history::entry::bench::BenchResult;
pub use crate::model::history::entry::commit::user::User;
pub use crate::model::history::entry::commit::Commit;
pub use crate::model::history::entry::tool::Tool;
pub use crate::model::history::entry::tool::UnknownTool;
pub use crate::model::history::entry::Entry;
pub use crate::model::history::error::MalformedStoreError;
pub use crate::model::history::suites::Suites;
pub use crate::model::history::HistoryStore;
pub use crate::output::format::Format;
pub use crate::output::Output;
