//! fxbuild CLI - Build automation for Java and JavaFX projects
//!
//! Entry point for the fxbuild command-line application.

use anyhow::Result;
use clap::Parser;

use fxbuild::cli::output::{display_error, OutputConfig};
use fxbuild::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Apply output configuration globally
    let output_config = OutputConfig::new(cli.quiet, cli.json, cli.verbose);
    output_config.apply_global();

    // Initialize tracing subscriber; logs go to stderr so stdout stays
    // machine-readable under --json
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(output_config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Run the command on its own task so Ctrl-C is observed even while a
    // compiler subprocess blocks the command's thread
    let mut command_task = tokio::spawn(Cli::run(cli));

    tokio::select! {
        joined = &mut command_task => match joined {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                display_error(&e);
                std::process::exit(1);
            }
            Err(e) => {
                tracing::error!("Unexpected failure: {e}");
                std::process::exit(1);
            }
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted by user");
            std::process::exit(1);
        }
    }
}
