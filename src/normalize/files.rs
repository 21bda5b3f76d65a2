//! File system traversal for .ts files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const TS_SUFFIX: &str = ".ts";

/// True if the file name ends with the `.ts` suffix (literal, case-sensitive).
fn matches_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(TS_SUFFIX))
}

fn walk_files_rec(dir_path: &Path, result: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir_path)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        } else if path.is_file() && matches_suffix(&path) {
            result.push(path);
        }
    }
    for d in &dirs {
        walk_files_rec(d, result)?;
    }
    Ok(())
}

/// Recursively yield every .ts file under root, at any depth. Directories are
/// never yielded. No ordering guarantee beyond what the OS listing provides.
///
/// Fails if root does not exist or is not a directory; a directory read error
/// anywhere in the tree propagates to the caller.
pub fn iter_ts_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    walk_files_rec(root, &mut result)?;
    Ok(result)
}
