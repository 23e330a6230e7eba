//! `jsonx` - query and reshape a JSON document.
//!
//! Usage:
//!   jsonx get user.name < doc.json
//!   jsonx set user.tags.0 '"admin"' < doc.json
//!   jsonx flatten < doc.json
//!
//! The document is read from stdin. Logging goes to stderr and is
//! controlled by `RUST_LOG` (default `warn`).

use std::io::Read;

use clap::Parser;
use jsonx::cli::{run, Cli};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("error: cannot read stdin: {e}");
        std::process::exit(1);
    }

    match run(&cli.command, &input) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
