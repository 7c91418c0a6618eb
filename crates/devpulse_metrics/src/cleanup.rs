use chrono::{DateTime, Local, NaiveDate};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Removes files in `dir` whose name contains every one of `patterns` and
/// whose modification date (local time) is before `today`.
///
/// Returns the removed paths, sorted. A missing directory removes nothing.
pub fn remove_stale(dir: &Path, patterns: &[&str], today: NaiveDate) -> io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut removed = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if !patterns.iter().all(|pattern| file_name.contains(pattern)) {
            continue;
        }

        let modified: DateTime<Local> = entry.metadata()?.modified()?.into();
        if modified.date_naive() >= today {
            continue;
        }

        let path = entry.path();
        fs::remove_file(&path)?;
        info!(path = %path.display(), modified = %modified.date_naive(), "removed stale file");
        removed.push(path);
    }

    removed.sort();
    Ok(removed)
}
