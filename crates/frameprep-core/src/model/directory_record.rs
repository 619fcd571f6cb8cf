/// Per-directory image counts and the folder structure built from them.
///
/// Records are stored in a flat `Vec` in the order the scanner visits
/// directories (parent before children), with a side index from relative
/// path to position for lookups.
use compact_str::CompactString;
use std::collections::HashMap;

/// Label used for the scan root in place of an empty relative path.
pub const ROOT_LABEL: &str = "ROOT";

/// Counts for a single directory. Only *immediate* children are counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    /// Path relative to the scan root, `/`-separated, or [`ROOT_LABEL`].
    pub rel_path: String,
    /// Number of immediate subdirectories.
    pub directories: usize,
    /// Names of immediately contained qualifying image files.
    pub image_files: Vec<CompactString>,
}

impl DirectoryRecord {
    pub fn new(rel_path: impl Into<String>) -> Self {
        Self {
            rel_path: rel_path.into(),
            directories: 0,
            image_files: Vec::new(),
        }
    }

    /// Number of qualifying image files directly in this directory.
    #[inline]
    pub fn files(&self) -> usize {
        self.image_files.len()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.rel_path == ROOT_LABEL
    }

    /// Whether the directory shows up in the per-directory breakdown.
    #[inline]
    pub fn has_content(&self) -> bool {
        self.files() > 0 || self.directories > 0
    }
}

/// Result of one analysis run.
#[derive(Debug, Clone, Default)]
pub struct FolderStructure {
    /// Records in visit order; the root is always first when present.
    pub records: Vec<DirectoryRecord>,
    /// Sum of per-directory qualifying file counts.
    pub total_image_files: u64,
    /// Sum of per-directory subdirectory counts.
    pub total_directories: u64,

    index: HashMap<String, usize>,
}

impl FolderStructure {
    pub fn with_capacity(estimated_dirs: usize) -> Self {
        Self {
            records: Vec::with_capacity(estimated_dirs),
            total_image_files: 0,
            total_directories: 0,
            index: HashMap::with_capacity(estimated_dirs),
        }
    }

    /// Append a record for a newly visited directory and return its position.
    ///
    /// Visiting the same relative path twice returns the existing position.
    pub fn insert_dir(&mut self, rel_path: &str) -> usize {
        if let Some(&pos) = self.index.get(rel_path) {
            return pos;
        }
        let pos = self.records.len();
        self.records.push(DirectoryRecord::new(rel_path));
        self.index.insert(rel_path.to_owned(), pos);
        pos
    }

    /// Count a subdirectory against the record at `parent`.
    pub(crate) fn add_subdirectory(&mut self, parent: usize) {
        self.records[parent].directories += 1;
        self.total_directories += 1;
    }

    /// Record a qualifying image file against the record at `parent`.
    pub(crate) fn add_image(&mut self, parent: usize, name: CompactString) {
        self.records[parent].image_files.push(name);
        self.total_image_files += 1;
    }

    pub fn get(&self, rel_path: &str) -> Option<&DirectoryRecord> {
        self.index.get(rel_path).map(|&pos| &self.records[pos])
    }

    pub fn root(&self) -> Option<&DirectoryRecord> {
        self.get(ROOT_LABEL)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records that appear in the per-directory breakdown.
    pub fn non_empty(&self) -> impl Iterator<Item = &DirectoryRecord> {
        self.records.iter().filter(|r| r.has_content())
    }
}
