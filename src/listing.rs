//! Local directory listing into transfer lists
//!
//! A [`TransferList`] is the flat, root-relative view of a local file or
//! directory tree that a transfer consumes. Directories are walked
//! breadth-first, so a directory entry always precedes its own children.

use crate::error::{Result, UtilError};
use crate::path::join_path;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// One file or directory in a transfer list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEntry {
    path: String,
    dir: bool,
    size: u64,
}

impl TransferEntry {
    /// A plain file of `size` bytes
    pub fn file(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            dir: false,
            size,
        }
    }

    /// A directory; directories carry no size
    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            dir: true,
            size: 0,
        }
    }

    /// Path relative to the list root, `/`-separated
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.dir
    }

    /// Byte length observed at listing time (0 for directories)
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Ordered listing of entries under a source and destination root
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransferList {
    source_root: String,
    dest_root: String,
    entries: Vec<TransferEntry>,
}

impl TransferList {
    /// An empty list transferring `source_root` to `dest_root`
    pub fn new(source_root: impl Into<String>, dest_root: impl Into<String>) -> Self {
        Self {
            source_root: source_root.into(),
            dest_root: dest_root.into(),
            entries: Vec::new(),
        }
    }

    /// An empty list whose source and destination share one root
    pub fn rooted(root: impl Into<String>) -> Self {
        let root = root.into();
        Self::new(root.clone(), root)
    }

    pub fn source_root(&self) -> &str {
        &self.source_root
    }

    pub fn dest_root(&self) -> &str {
        &self.dest_root
    }

    pub fn add_file(&mut self, path: impl Into<String>, size: u64) {
        self.push(TransferEntry::file(path, size));
    }

    pub fn add_dir(&mut self, path: impl Into<String>) {
        self.push(TransferEntry::dir(path));
    }

    fn push(&mut self, entry: TransferEntry) {
        tracing::trace!(path = entry.path(), dir = entry.is_dir(), size = entry.size(), "entry");
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TransferEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransferEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all file sizes in bytes
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(TransferEntry::size).sum()
    }

    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_dir()).count()
    }

    pub fn dir_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dir()).count()
    }
}

impl<'a> IntoIterator for &'a TransferList {
    type Item = &'a TransferEntry;
    type IntoIter = std::slice::Iter<'a, TransferEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// List a local file or directory tree
///
/// A path that is not a directory yields a single file entry whose relative
/// path is `path` itself. A directory is walked breadth-first: the root's
/// children come first, then their children, and so on. Sibling order is
/// whatever the filesystem enumerates.
///
/// Any failure (missing root, unreadable subdirectory) aborts the whole
/// listing with [`UtilError::FileAccess`].
///
/// # Examples
/// ```
/// use transfer_utils::list;
/// use tempfile::TempDir;
///
/// let temp_dir = TempDir::new().unwrap();
/// std::fs::write(temp_dir.path().join("a.txt"), b"hello").unwrap();
///
/// let listing = list(temp_dir.path()).unwrap();
/// assert_eq!(listing.len(), 1);
/// assert_eq!(listing.entries()[0].path(), "a.txt");
/// assert_eq!(listing.total_size(), 5);
/// ```
pub fn list<P: AsRef<Path>>(path: P) -> Result<TransferList> {
    let root = path.as_ref();
    let root_str = root.to_string_lossy().to_string();

    let metadata = fs::metadata(root).map_err(|e| {
        tracing::warn!(path = %root_str, error = %e, "cannot stat listing root");
        UtilError::file_access(root_str.as_str(), &e)
    })?;

    let mut listing = TransferList::rooted(root_str.as_str());

    if !metadata.is_dir() {
        listing.add_file(root_str.as_str(), metadata.len());
        return Ok(listing);
    }

    // Real paths are read from disk; lossy strings only name the entries
    let mut pending: VecDeque<(PathBuf, String)> = VecDeque::new();
    pending.push_back((root.to_path_buf(), String::new()));

    while let Some((dir, rel_dir)) = pending.pop_front() {
        let read_dir = fs::read_dir(&dir).map_err(|e| fail(&dir, &e))?;
        let mut children = 0usize;

        for child in read_dir {
            let child = child.map_err(|e| fail(&dir, &e))?;
            let child_path = child.path();
            let name = child.file_name().to_string_lossy().to_string();
            let rel_path = join_path(&rel_dir, &name);

            // Follows symlinks, same as a plain stat
            let child_meta = fs::metadata(&child_path).map_err(|e| fail(&child_path, &e))?;

            if child_meta.is_dir() {
                listing.add_dir(rel_path.as_str());
                pending.push_back((child_path, rel_path));
            } else {
                listing.add_file(rel_path, child_meta.len());
            }
            children += 1;
        }

        tracing::debug!(dir = %rel_dir, children, "expanded directory");
    }

    tracing::debug!(
        root = %root_str,
        entries = listing.len(),
        bytes = listing.total_size(),
        "listing complete"
    );

    Ok(listing)
}

/// Byte length of the file at `path`
///
/// # Examples
/// ```
/// use transfer_utils::size;
///
/// assert!(size("/definitely/not/here").is_err());
/// ```
pub fn size<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| fail(path, &e))
}

fn fail(path: &Path, err: &std::io::Error) -> UtilError {
    let path = path.to_string_lossy();
    tracing::warn!(path = %path, error = %err, "filesystem access failed");
    UtilError::file_access(path, err)
}
