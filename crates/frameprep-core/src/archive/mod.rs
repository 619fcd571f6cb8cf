/// ZIP archive builder.
///
/// Packs every file under the source root, regardless of extension, into
/// a Deflate-compressed ZIP. Entry names are root-relative and `/`-separated.
/// Directories are implied by entry names and never written on their own.
///
/// The writer is always finalised, including when an entry fails partway.
/// On failure the incomplete output file is removed before the error is
/// returned, so whatever is left at the output path is a complete archive.
use crate::error::{PrepareError, Result};
use crate::model::size::format_size;
use crate::scanner::{ensure_directory, slash_relative, walk_error, walker};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Files at or above this size need ZIP64 extra fields.
const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

/// Write `source_root` into a new archive at `output_path` and return the
/// archive's size in bytes. An existing file at `output_path` is replaced.
pub fn create_zip_archive(source_root: &Path, output_path: &Path) -> Result<u64> {
    let start = Instant::now();
    ensure_directory(source_root)?;

    let file = File::create(output_path).map_err(|e| PrepareError::io(output_path, e))?;
    // The output may sit inside the tree being archived.
    let self_path = fs::canonicalize(output_path).ok();

    let mut zip = ZipWriter::new(file);
    let written = write_entries(&mut zip, source_root, output_path, self_path.as_deref());
    let finished = zip.finish();

    let outcome = written.and_then(|entries| {
        let file = finished.map_err(|e| PrepareError::zip(output_path, e))?;
        let size = file
            .metadata()
            .map_err(|e| PrepareError::io(output_path, e))?
            .len();
        Ok((entries, size))
    });

    match outcome {
        Ok((entries, size)) => {
            info!(
                "Archived {} entries from {} into {} ({}) in {:?}",
                entries,
                source_root.display(),
                output_path.display(),
                format_size(size),
                start.elapsed()
            );
            Ok(size)
        }
        Err(err) => {
            warn!(
                "Removing incomplete archive {}: {err}",
                output_path.display()
            );
            if let Err(e) = fs::remove_file(output_path) {
                warn!("Could not remove {}: {e}", output_path.display());
            }
            Err(err)
        }
    }
}

/// Stream every file under `root` into `zip`. Returns the entry count.
fn write_entries(
    zip: &mut ZipWriter<File>,
    root: &Path,
    output_path: &Path,
    self_path: Option<&Path>,
) -> Result<usize> {
    let mut entries = 0;

    for entry_result in walker(root) {
        let entry = entry_result.map_err(|source| walk_error(root, source))?;
        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }

        let path = entry.path();
        // Symlinks contribute their target's content; links to folders are not descended.
        if file_type.is_symlink() && fs::metadata(&path).is_ok_and(|m| m.is_dir()) {
            debug!("Skipping directory symlink {}", path.display());
            continue;
        }
        if is_output_file(&path, output_path, self_path) {
            debug!("Skipping the archive itself at {}", path.display());
            continue;
        }
        let Some(name) = archive_entry_name(root, &path) else {
            continue;
        };

        add_file(zip, &path, name, output_path)?;
        entries += 1;
    }

    Ok(entries)
}

fn add_file(zip: &mut ZipWriter<File>, path: &Path, name: String, output_path: &Path) -> Result<()> {
    let mut source = File::open(path).map_err(|e| PrepareError::io(path, e))?;
    let len = source
        .metadata()
        .map_err(|e| PrepareError::io(path, e))?
        .len();

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(len >= ZIP64_THRESHOLD);

    debug!("Adding {name} ({})", format_size(len));
    zip.start_file(name, options)
        .map_err(|e| PrepareError::zip(output_path, e))?;
    io::copy(&mut source, zip).map_err(|e| PrepareError::io(path, e))?;
    Ok(())
}

/// Whether `path` is the archive currently being written.
///
/// Only entries sharing the output's file name are canonicalised.
fn is_output_file(path: &Path, output_path: &Path, self_path: Option<&Path>) -> bool {
    let Some(self_path) = self_path else {
        return false;
    };
    if path.file_name() != output_path.file_name() {
        return false;
    }
    fs::canonicalize(path).is_ok_and(|p| p == self_path)
}

/// Entry name `path` would get in an archive of `root`, if it is under it.
pub fn archive_entry_name(root: &Path, path: &Path) -> Option<String> {
    slash_relative(root, path).filter(|n| !n.is_empty())
}
