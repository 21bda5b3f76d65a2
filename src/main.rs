//! CLI entrypoint for ts-to-lf.

use clap::{CommandFactory, Parser};
use tslf::{run, Args};

fn main() {
    // No args at all: show usage
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        let _ = cmd.print_help();
        std::process::exit(2);
    }

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
