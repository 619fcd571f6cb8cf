/// Shared directory walker and path helpers.
///
/// Both the structure analyser and the archive builder walk the tree with
/// the same `jwalk` configuration: serial, sorted by name, hidden entries
/// included, symlinks not followed. Serial + sorted gives a stable
/// depth-first, parent-before-children order on every platform.
use crate::error::PrepareError;
use crate::model::ROOT_LABEL;
use std::path::Path;

/// Build the walker used for every traversal of the source tree.
pub fn walker(root: &Path) -> jwalk::WalkDir {
    jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial)
}

/// Wrap a `jwalk` error, falling back to `root` when it carries no path.
pub fn walk_error(root: &Path, source: jwalk::Error) -> PrepareError {
    let path = source
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    PrepareError::Walk { path, source }
}

/// `path` relative to `root`, joined with `/` on every platform.
///
/// Returns `None` when `path` is not under `root`, and an empty string
/// for `root` itself.
pub fn slash_relative(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

/// Directory label used as the structure key: [`ROOT_LABEL`] for the root.
pub fn directory_label(root: &Path, dir: &Path) -> Option<String> {
    slash_relative(root, dir).map(|rel| {
        if rel.is_empty() {
            ROOT_LABEL.to_string()
        } else {
            rel
        }
    })
}
