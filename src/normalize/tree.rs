//! Orchestrate a whole-tree conversion run.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::convert::convert_file;
use super::files::iter_ts_files;

/// Convert every .ts file under root, one at a time, announcing each path on
/// `out` before rewriting it. Returns the number of files converted.
///
/// The first failure aborts the run; files converted before it stay converted.
pub fn convert_tree(root: &Path, out: &mut dyn Write) -> Result<usize> {
    let files = iter_ts_files(root)
        .with_context(|| format!("failed to walk {}", root.display()))?;
    for path in &files {
        writeln!(out, "Converting file: {}", path.display())?;
        convert_file(path).with_context(|| format!("failed to convert {}", path.display()))?;
    }
    Ok(files.len())
}
