//! `rounddraw` binary entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rounddraw::cli::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);
    cli::run(&args)
}

/// Installs the tracing subscriber. `RUST_LOG` wins over the CLI flags.
fn init_tracing(args: &Args) {
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
