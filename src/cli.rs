//! CLI: args and run logic.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::normalize::convert_tree;

#[derive(Parser)]
#[command(name = "ts-to-lf")]
#[command(about = "Convert CRLF line endings to LF in every .ts file under a directory.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Root directory to process; every .ts file beneath it is rewritten in place
    #[arg(value_name = "DIRECTORY")]
    pub path: PathBuf,
}

/// Convert every .ts file under the given root and print a completion line.
/// The first I/O failure aborts the run; files already converted stay converted.
pub fn run(args: Args) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    convert_tree(&args.path, &mut stdout)?;
    writeln!(stdout, "Conversion completed.")?;
    Ok(())
}
