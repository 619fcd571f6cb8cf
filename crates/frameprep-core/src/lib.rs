/// FramePrep Core — folder analysis, ZIP packaging, and console reporting.
///
/// This crate contains all the logic behind the `frameprep` binary. The
/// binary only sets up logging and hands a writer to [`prepare::run`].
///
/// # Modules
///
/// - [`config`] — Fixed source folder, output file, and extension set.
/// - [`model`] — Per-directory records and size formatting.
/// - [`scanner`] — Serial directory walk that builds the folder structure.
/// - [`analysis`] — Image file qualification by extension.
/// - [`archive`] — Deflate-compressed ZIP builder.
/// - [`report`] — Emoji-annotated console report blocks.
/// - [`prepare`] — The validate → analyse → archive driver.
pub mod analysis;
pub mod archive;
pub mod config;
pub mod error;
pub mod model;
pub mod prepare;
pub mod report;
pub mod scanner;

pub use error::{PrepareError, Result};
