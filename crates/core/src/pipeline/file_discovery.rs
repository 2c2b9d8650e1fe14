use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively find files under `dir` whose extension matches `extension`
/// (no leading dot, case-sensitive).
///
/// A missing or unreadable directory yields an empty result, never an
/// error. Results are sorted for reproducibility.
pub fn find_files_with_extension(dir: &Path, extension: &str) -> Vec<PathBuf> {
    log::info!(
        "searching {} for files with extension {extension}",
        dir.display()
    );

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry.path().extension().and_then(|e| e.to_str()) == Some(extension)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}
