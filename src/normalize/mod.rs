//! Recursive CRLF -> LF normalization of .ts files.

mod convert;
mod files;
mod tree;

pub use convert::{convert_file, crlf_to_lf};
pub use files::iter_ts_files;
pub use tree::convert_tree;
