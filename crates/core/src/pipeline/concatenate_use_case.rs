use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Joins each group's transcripts into one file per source recording.
///
/// Members are read in their (already sorted) group order and joined with a
/// single newline; no trailing separator is added. Unlike the earlier
/// stages this one always overwrites: the final transcript is cheap to
/// rebuild and stale output is worse than a rewrite.
pub struct ConcatenateUseCase;

impl ConcatenateUseCase {
    pub fn execute(
        &self,
        groups: &HashMap<PathBuf, Vec<PathBuf>>,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
        fs::create_dir_all(output_dir)?;

        let mut outputs = Vec::with_capacity(groups.len());
        for (key, members) in groups {
            let mut contents = Vec::with_capacity(members.len());
            for member in members {
                contents.push(fs::read_to_string(member)?);
            }
            let joined = contents.join("\n");

            let file_name = key
                .file_name()
                .ok_or_else(|| format!("group key has no file name: {}", key.display()))?;
            let out_path = output_dir.join(file_name);

            log::info!("writing {} chars to {}", joined.len(), out_path.display());
            fs::write(&out_path, joined)?;
            outputs.push(out_path);
        }

        outputs.sort();
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn group(
        key: &Path,
        dir: &Path,
        members: &[(&str, &str)],
    ) -> HashMap<PathBuf, Vec<PathBuf>> {
        let mut paths = Vec::new();
        for (name, content) in members {
            let path = dir.join(name);
            fs::write(&path, content).unwrap();
            paths.push(path);
        }
        HashMap::from([(key.to_path_buf(), paths)])
    }

    #[test]
    fn test_joins_members_with_single_newline() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("out");
        let groups = group(
            &tmp.path().join("m.txt"),
            tmp.path(),
            &[("m-001.txt", "a"), ("m-002.txt", "b"), ("m-003.txt", "c")],
        );

        let outputs = ConcatenateUseCase.execute(&groups, &out_dir).unwrap();

        assert_eq!(outputs.len(), 1);
        assert_eq!(fs::read_to_string(&outputs[0]).unwrap(), "a\nb\nc");
    }

    #[test]
    fn test_output_named_after_group_key() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("out");
        let groups = group(
            &tmp.path().join("weekly-standup.txt"),
            tmp.path(),
            &[("weekly-standup-001.txt", "hello")],
        );

        let outputs = ConcatenateUseCase.execute(&groups, &out_dir).unwrap();
        assert_eq!(outputs[0], out_dir.join("weekly-standup.txt"));
    }

    #[test]
    fn test_single_member_has_no_separator() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("out");
        let groups = group(
            &tmp.path().join("m.txt"),
            tmp.path(),
            &[("m-001.txt", "only")],
        );

        let outputs = ConcatenateUseCase.execute(&groups, &out_dir).unwrap();
        assert_eq!(fs::read_to_string(&outputs[0]).unwrap(), "only");
    }

    #[test]
    fn test_overwrites_existing_output() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("out");
        fs::create_dir_all(&out_dir).unwrap();
        fs::write(out_dir.join("m.txt"), "stale").unwrap();

        let groups = group(
            &tmp.path().join("m.txt"),
            tmp.path(),
            &[("m-001.txt", "fresh")],
        );

        ConcatenateUseCase.execute(&groups, &out_dir).unwrap();
        assert_eq!(fs::read_to_string(out_dir.join("m.txt")).unwrap(), "fresh");
    }

    #[test]
    fn test_creates_output_directory() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("deeply").join("nested");
        let groups = group(&tmp.path().join("m.txt"), tmp.path(), &[("m-001.txt", "x")]);

        ConcatenateUseCase.execute(&groups, &out_dir).unwrap();
        assert!(out_dir.is_dir());
    }

    #[test]
    fn test_missing_member_is_error() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("out");
        let groups = HashMap::from([(
            tmp.path().join("m.txt"),
            vec![tmp.path().join("m-001.txt")],
        )]);

        let result = ConcatenateUseCase.execute(&groups, &out_dir);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_groups_write_nothing() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("out");

        let outputs = ConcatenateUseCase
            .execute(&HashMap::new(), &out_dir)
            .unwrap();
        assert!(outputs.is_empty());
        assert!(out_dir.is_dir());
    }
}
