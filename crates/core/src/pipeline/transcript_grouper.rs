use std::collections::HashMap;
use std::path::PathBuf;

use crate::pipeline::segment_naming::{group_key, segment_sort_key, GroupingError};

/// Map segment transcript paths back to their source recordings.
///
/// Keys are reconstructed paths with the segment number stripped
/// (`/splits/meeting1.txt`); each value holds the group's members sorted by
/// their numeric sort key, ascending. The sort is stable, so members whose
/// keys tie (a stem that itself contains digits pins every member to the
/// same first digit run) keep their input order.
///
/// A member with no digits in its file name is a hard error: such files
/// never come out of the segmenter, so their presence means the splits
/// directory holds something that was never ours.
pub fn group_transcripts(
    paths: &[PathBuf],
) -> Result<HashMap<PathBuf, Vec<PathBuf>>, GroupingError> {
    let mut groups: HashMap<PathBuf, Vec<PathBuf>> = HashMap::new();
    for path in paths {
        groups.entry(group_key(path)).or_default().push(path.clone());
    }

    for members in groups.values_mut() {
        let mut keyed: Vec<(u32, PathBuf)> = Vec::with_capacity(members.len());
        for member in members.iter() {
            keyed.push((segment_sort_key(member)?, member.clone()));
        }
        keyed.sort_by_key(|(key, _)| *key);
        *members = keyed.into_iter().map(|(_, path)| path).collect();
    }

    Ok(groups)
}
