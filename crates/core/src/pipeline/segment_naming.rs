use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::TRANSCRIPT_EXTENSION;

#[derive(Error, Debug)]
pub enum GroupingError {
    #[error("no digits in segment filename: {0}")]
    MalformedName(PathBuf),
}

/// Build a segment file name: `{stem}-{NNN}.{ext}`, 1-based, zero-padded
/// to 3 digits.
pub fn segment_file_name(stem: &str, index: usize, ext: &str) -> String {
    format!("{stem}-{index:03}.{ext}")
}

/// Strip the segment number from a path to recover its recording's key:
/// `/splits/meeting1-001.txt` → `/splits/meeting1.txt`.
///
/// Only the rightmost hyphen component of the file name is removed, so a
/// stem that itself contains hyphens survives intact
/// (`weekly-standup-003.txt` → `weekly-standup.txt`). The segmenter always
/// appends the number as the final hyphenated component.
pub fn group_key(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = match name.rfind('-') {
        Some(idx) => &name[..idx],
        None => "",
    };
    let ext = match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    };

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{stem}{ext}"))
}

/// Ordering key within a group: the first maximal run of decimal digits in
/// the file name, as an integer. Numeric ordering, never lexical, so
/// non-zero-padded names still sort correctly.
pub fn segment_sort_key(path: &Path) -> Result<u32, GroupingError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut digits = String::new();
    for c in name.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !digits.is_empty() {
            break;
        }
    }

    digits
        .parse()
        .map_err(|_| GroupingError::MalformedName(path.to_path_buf()))
}

/// Transcript path for a segment audio path: same name, `.txt` extension.
pub fn transcript_path_for_audio(audio_path: &Path) -> PathBuf {
    audio_path.with_extension(TRANSCRIPT_EXTENSION)
}
