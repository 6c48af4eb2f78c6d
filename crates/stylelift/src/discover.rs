//! HTML file discovery

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::AppResult;

/// Directories never descended into
const SKIPPED_DIRS: &[&str] = &[".git", "node_modules"];

/// List `.html` files under `root`, sorted by path.
///
/// Without `recursive` only files directly in `root` are returned.
pub fn html_files(root: &Path, recursive: bool) -> AppResult<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        // Follows symlinks so linked pages are included.
        if entry.path().is_file() && has_html_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    log::debug!("Found {} HTML files under {}", files.len(), root.display());
    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| SKIPPED_DIRS.contains(&name))
}

fn has_html_extension(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "html")
}
