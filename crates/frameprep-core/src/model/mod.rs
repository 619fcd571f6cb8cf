/// Data model for a folder analysis run.
///
/// Re-exports the per-directory record, the assembled structure, and size
/// formatting helpers.
pub mod directory_record;
pub mod size;

pub use directory_record::{DirectoryRecord, FolderStructure, ROOT_LABEL};
