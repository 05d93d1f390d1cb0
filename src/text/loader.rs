//! Loading documents from a directory and writing aligned rows back out
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

use crate::text::document::{AlignedDocument, Document};
use crate::text::normalize::normalize;
use crate::{Result, SynopsisError};

/// Prefix for aligned output files
pub const DEFAULT_ALIGNED_PREFIX: &str = "aligned_";

fn matching_files(dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(SynopsisError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("directory '{}' does not exist", dir.display()),
        )));
    }

    let pattern = format!(
        "{}/{}",
        Pattern::escape(&dir.to_string_lossy()),
        file_pattern
    );
    // wildcards never match hidden files such as `.gitkeep`
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let entries = glob::glob_with(&pattern, options)
        .map_err(|e| SynopsisError::InvalidInput(format!("bad file pattern '{}': {}", pattern, e)))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Loads every file in `dir` as a normalized document, sorted by file name.
/// Files that cannot be read as UTF-8 text are skipped.
pub fn load_directory<P: AsRef<Path>>(dir: P) -> Result<Vec<Document>> {
    let dir = dir.as_ref();
    let mut documents = Vec::new();

    for path in matching_files(dir, "*")? {
        match fs::read_to_string(&path) {
            Ok(raw) => documents.push(Document::new(file_name(&path), normalize(&raw))),
            Err(e) => tracing::warn!("Skipping {} due to error: {}", path.display(), e),
        }
    }

    tracing::debug!(count = documents.len(), dir = %dir.display(), "Loaded documents");
    Ok(documents)
}

/// Writes each row to `dir/{prefix}{id}`, creating `dir` if needed.
pub fn write_aligned<P: AsRef<Path>>(
    dir: P,
    rows: &[AlignedDocument],
    prefix: &str,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(rows.len());
    for row in rows {
        let path = dir.join(format!("{}{}", prefix, row.id));
        fs::write(&path, &row.aligned)?;
        written.push(path);
    }
    Ok(written)
}

/// Reads back `{prefix}*.txt` rows written by [`write_aligned`]. The row id
/// is the file name without the prefix and the `.txt` extension.
pub fn load_aligned<P: AsRef<Path>>(dir: P, prefix: &str) -> Result<Vec<AlignedDocument>> {
    let pattern = format!("{}*.txt", Pattern::escape(prefix));
    let mut rows = Vec::new();

    for path in matching_files(dir.as_ref(), &pattern)? {
        let name = file_name(&path);
        let stem = name.strip_suffix(".txt").unwrap_or(name.as_str());
        let id = stem.strip_prefix(prefix).unwrap_or(stem).to_string();
        rows.push(AlignedDocument::new(id, fs::read_to_string(&path)?));
    }
    Ok(rows)
}
