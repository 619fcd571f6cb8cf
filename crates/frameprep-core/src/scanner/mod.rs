/// Scanner module — builds the per-directory image counts for a folder.
///
/// The walk is single-threaded and blocking. Records are created in
/// pre-order, so a directory's record always exists before any of its
/// children are counted against it.
pub mod walk;

use crate::analysis::is_qualifying_image;
use crate::error::{PrepareError, Result};
use crate::model::{FolderStructure, ROOT_LABEL};
use compact_str::CompactString;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

pub use walk::{directory_label, slash_relative, walk_error, walker};

/// Walk `root` and count subdirectories and qualifying image files per
/// directory.
///
/// Each file is counted once, in the directory that physically contains it.
/// The two totals are plain sums of the per-directory counts. Any traversal
/// error aborts the analysis.
pub fn analyze_structure(root: &Path) -> Result<FolderStructure> {
    let start = Instant::now();
    ensure_directory(root)?;

    let mut structure = FolderStructure::with_capacity(64);

    for entry_result in walker(root) {
        let entry = entry_result.map_err(|source| walk_error(root, source))?;
        let path = entry.path();

        if entry.depth == 0 {
            structure.insert_dir(ROOT_LABEL);
            continue;
        }

        let Some(parent_label) = path.parent().and_then(|p| directory_label(root, p)) else {
            continue;
        };
        // Parent-first order means this is a lookup, not an insertion.
        let parent = structure.insert_dir(&parent_label);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            if let Some(label) = directory_label(root, &path) {
                structure.insert_dir(&label);
            }
            structure.add_subdirectory(parent);
        } else if file_type.is_symlink() && std::fs::metadata(&path).is_ok_and(|m| m.is_dir()) {
            // Linked folders count as subdirectories but are not entered.
            structure.add_subdirectory(parent);
        } else {
            let name = entry.file_name().to_string_lossy();
            if is_qualifying_image(&name) {
                structure.add_image(parent, CompactString::new(name.as_ref()));
            }
        }
    }

    for record in &structure.records {
        debug!(
            dir = %record.rel_path,
            subdirectories = record.directories,
            images = ?record.image_files,
            "Directory analysed"
        );
    }
    info!(
        "Analysed {} in {:?}: {} image files, {} directories",
        root.display(),
        start.elapsed(),
        structure.total_image_files,
        structure.total_directories
    );

    Ok(structure)
}

pub(crate) fn ensure_directory(root: &Path) -> Result<()> {
    let meta = std::fs::metadata(root).map_err(|e| PrepareError::io(root, e))?;
    if meta.is_dir() {
        Ok(())
    } else {
        Err(PrepareError::NotADirectory(root.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DirectoryRecord;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn counts_only_immediate_children() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("RayBan/Round")).unwrap();
        touch(&root.join("cover.png"));
        touch(&root.join("RayBan/logo.gif"));
        touch(&root.join("RayBan/Round/black.jpg"));
        touch(&root.join("RayBan/Round/brown.JPEG"));

        let s = analyze_structure(root).unwrap();

        let top = s.root().unwrap();
        assert_eq!(top.files(), 1);
        assert_eq!(top.directories, 1);
        assert_eq!(s.get("RayBan").map(DirectoryRecord::files), Some(1));
        assert_eq!(s.get("RayBan").map(|r| r.directories), Some(1));
        assert_eq!(s.get("RayBan/Round").map(DirectoryRecord::files), Some(2));
        assert_eq!(s.total_image_files, 4);
        assert_eq!(s.total_directories, 2);
    }

    #[test]
    fn mixed_case_and_non_image_files() {
        let tmp = TempDir::new().unwrap();
        for name in ["a.JPG", "b.png", "c.txt"] {
            touch(&tmp.path().join(name));
        }

        let s = analyze_structure(tmp.path()).unwrap();
        let root = s.get(ROOT_LABEL).unwrap();
        assert_eq!(root.files(), 2);
        assert_eq!(root.image_files, vec!["a.JPG", "b.png"]);
    }

    #[test]
    fn records_are_in_pre_order() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/inner")).unwrap();
        fs::create_dir_all(tmp.path().join("b")).unwrap();

        let s = analyze_structure(tmp.path()).unwrap();
        let order: Vec<&str> = s.records.iter().map(|r| r.rel_path.as_str()).collect();
        assert_eq!(order, vec![ROOT_LABEL, "a", "a/inner", "b"]);
    }

    #[test]
    fn hidden_files_are_counted() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join(".hidden.png"));
        let s = analyze_structure(tmp.path()).unwrap();
        assert_eq!(s.total_image_files, 1);
    }

    #[cfg(unix)]
    #[test]
    fn directory_symlink_counts_as_subdirectory() {
        let tmp = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        touch(&target.path().join("inside.png"));
        fs::create_dir(tmp.path().join("Real")).unwrap();
        std::os::unix::fs::symlink(target.path(), tmp.path().join("Linked.jpg")).unwrap();

        let s = analyze_structure(tmp.path()).unwrap();

        let root = s.root().unwrap();
        assert_eq!(root.directories, 2);
        assert!(root.image_files.is_empty());
        assert_eq!(s.total_image_files, 0, "linked folder is not entered");
        assert!(s.get("Linked.jpg").is_none());
    }

    /// A symlink to a file is still matched by name.
    #[cfg(unix)]
    #[test]
    fn file_symlink_is_matched_by_name() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("real.png"));
        std::os::unix::fs::symlink(tmp.path().join("real.png"), tmp.path().join("alias.jpg"))
            .unwrap();

        let s = analyze_structure(tmp.path()).unwrap();
        assert_eq!(s.root().unwrap().image_files, vec!["alias.jpg", "real.png"]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("Locked");
        fs::create_dir(&locked).unwrap();
        touch(&locked.join("hidden.jpg"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not stop root; nothing to check then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = analyze_structure(tmp.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, PrepareError::Walk { .. }), "got {err:?}");
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = analyze_structure(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, PrepareError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn file_root_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("single.jpg");
        touch(&file);
        let err = analyze_structure(&file).unwrap_err();
        assert!(matches!(err, PrepareError::NotADirectory(_)), "got {err:?}");
    }
}
