//! Reelrec CLI entry point.
//!
//! Parses arguments, installs the tracing subscriber, executes the chosen
//! command, and renders any failure as a user-friendly error before
//! exiting nonzero.

use anyhow::Result;
use clap::Parser;
use reelrec_cli::cli;
use reelrec_cli::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.build_config().env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
