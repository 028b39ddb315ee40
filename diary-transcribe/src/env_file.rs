use std::path::{Path, PathBuf};

/// Load the nearest `.env` at or above `dir` into the process environment
///
/// Variables already set keep their values. Returns the file that was
/// loaded, or `None` when there is no readable `.env`.
pub fn load_from(dir: &Path) -> Option<PathBuf> {
    let path = dir.ancestors().map(|d| d.join(".env")).find(|p| p.is_file())?;
    dotenvy::from_path(&path).ok()?;
    Some(path)
}
