/// Error type shared by the scanner, archive builder, and driver.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrepareError>;

#[derive(Debug, Error)]
pub enum PrepareError {
    /// The source path exists but is a file, not a folder.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Directory traversal failed (permission denied, vanished entry, ...).
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: jwalk::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write archive {}: {source}", path.display())]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// Writing the console report failed (closed pipe, full disk on redirect).
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

impl PrepareError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn zip(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        Self::Zip {
            path: path.into(),
            source,
        }
    }
}
