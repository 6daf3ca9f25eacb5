//! Single-level sorted directory enumeration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One entry of a directory listing.
#[derive(Debug, Clone)]
pub struct WalkEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// List one directory level, sorted by name (case-sensitive byte order).
///
/// Entries whose name starts with `.` are skipped when `hide_hidden` is set.
/// `is_dir` follows symlinks; a broken symlink counts as a file.
pub fn sorted_entries(path: &Path, hide_hidden: bool) -> io::Result<Vec<WalkEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if hide_hidden && name.starts_with('.') {
            continue;
        }
        let path = entry.path();
        let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
        entries.push(WalkEntry { name, path, is_dir });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Sorted names of the subdirectories of `parent`.
///
/// No hidden filtering here: sibling listings always show every directory,
/// the hidden filter applies only inside subtree recursion.
pub fn sorted_dir_names(parent: &Path) -> io::Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(parent)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            fs::metadata(entry.path())
                .map(|m| m.is_dir())
                .unwrap_or(false)
        })
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Ok(names)
}
