// Cleanup of placeholder artifacts left behind by the scraper: `.json`
// files of one exact byte size (an empty result document) and the
// directories that emptying them leaves behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

/// Delete every `.json` file under `dir` whose size is exactly
/// `placeholder_size` bytes. Returns the deleted paths.
pub fn delete_empty_json_files(dir: &Path, placeholder_size: u64) -> Result<Vec<PathBuf>> {
    let mut deleted = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if entry.metadata()?.len() == placeholder_size {
            fs::remove_file(entry.path())?;
            deleted.push(entry.path().to_path_buf());
        }
    }
    Ok(deleted)
}

/// Remove directories under `dir` that are left empty, deepest first.
/// `dir` itself is never removed. Returns the removed paths.
pub fn delete_empty_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for entry in WalkDir::new(dir).contents_first(true) {
        let entry = entry?;
        if !entry.file_type().is_dir() || entry.path() == dir {
            continue;
        }
        if fs::read_dir(entry.path())?.next().is_none() {
            fs::remove_dir(entry.path())?;
            removed.push(entry.path().to_path_buf());
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn deletes_only_exact_size_json_files() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        let c = dir.path().join("c.txt");
        fs::write(&a, [b'{'; 18]).unwrap();
        fs::write(&b, [b'{'; 30]).unwrap();
        fs::write(&c, [b'{'; 18]).unwrap();

        let deleted = delete_empty_json_files(dir.path(), 18).unwrap();
        assert_eq!(deleted, vec![a.clone()]);
        assert!(!a.exists());
        assert!(b.exists());
        assert!(c.exists());
    }

    #[test]
    fn removes_directories_emptied_by_the_file_pass() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("batch/0");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("only.json"), [b'{'; 18]).unwrap();
        let kept = dir.path().join("batch/1");
        fs::create_dir_all(&kept).unwrap();
        fs::write(kept.join("full.json"), [b'{'; 64]).unwrap();

        delete_empty_json_files(dir.path(), 18).unwrap();
        let removed = delete_empty_dirs(dir.path()).unwrap();

        assert_eq!(removed, vec![nested.clone()]);
        assert!(!nested.exists());
        assert!(kept.exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn removes_nested_empty_directory_chains() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
        let removed = delete_empty_dirs(dir.path()).unwrap();
        // contents_first yields c before b before a, so the whole chain goes.
        assert_eq!(removed.len(), 3);
        assert!(!dir.path().join("a").exists());
    }
}
