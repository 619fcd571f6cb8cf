/// Fixed run configuration.
///
/// The tool takes no arguments, reads no config file, and consults no
/// environment variables: everything it needs is a literal here.
use std::path::PathBuf;

/// Folder holding the eyeglass frame images to package.
pub const DEFAULT_SOURCE_DIR: &str =
    r"C:\Users\prota\Downloads\Eyeglass_Frames-20251005T184121Z-1-001\Eyeglass_Frames";

/// Archive name, written to the current working directory.
pub const DEFAULT_OUTPUT_ZIP: &str = "eyeglass_frames_organized.zip";

/// Extensions (without the dot) counted as image files. Matched case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Where to read from and where to write the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub source_dir: PathBuf,
    pub output_zip: PathBuf,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_zip: PathBuf::from(DEFAULT_OUTPUT_ZIP),
        }
    }
}
