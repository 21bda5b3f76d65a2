//! Normalize CRLF line endings to LF across a TypeScript source tree.

pub mod cli;
pub mod normalize;

pub use cli::{run, Args};
pub use normalize::{convert_file, convert_tree, crlf_to_lf, iter_ts_files};
