//! CRLF -> LF byte substitution and in-place file rewriting.

use std::fs;
use std::io;
use std::path::Path;

/// Replace every CRLF pair with a single LF, scanning left to right,
/// non-overlapping. Lone carriage returns survive; no other byte changes.
pub fn crlf_to_lf(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        if input[i] == b'\r' && input.get(i + 1) == Some(&b'\n') {
            out.push(b'\n');
            i += 2;
        } else {
            out.push(input[i]);
            i += 1;
        }
    }
    out
}

/// Rewrite one file in place with its CRLF pairs collapsed to LF.
///
/// Content is handled as raw bytes, so non-UTF-8 files pass through without
/// re-encoding. The file is rewritten (truncated) even when it contained no
/// CRLF pair.
pub fn convert_file(path: &Path) -> io::Result<()> {
    let content = fs::read(path)?;
    fs::write(path, crlf_to_lf(&content))
}
