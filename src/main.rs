//! # `optbind`
//!
//! Runs the bundled `greet` command through the option binder.
//!
//! ## Usage
//!
//! ```sh
//! optbind -- --name Ada --count 2 -x welcome
//! optbind -- --help
//! optbind --describe
//! ```
//!
//! Wrapper flags come before `--`; everything after it is parsed by the
//! binder. The process exits with the command's exit code, or with the
//! error's exit code when binding fails.

use anyhow::Result;
use clap::Parser as _;
use optbind::OptsError;
use optbind::cli::Args;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr so stdout only carries command output
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if args.usage {
        match optbind::run_usage() {
            Ok(()) => std::process::exit(0),
            Err(err) => fail(err),
        }
    }

    if args.describe {
        match optbind::run_describe() {
            Ok(()) => std::process::exit(0),
            Err(err) => {
                error!("{:#}", err);
                std::process::exit(
                    err.downcast_ref::<OptsError>()
                        .map_or(1, OptsError::exit_code),
                );
            }
        }
    }

    match optbind::run(&args) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => fail(err),
    }
}

fn fail(err: OptsError) -> ! {
    let exit_code = err.exit_code();
    error!("{:#}", anyhow::Error::from(err));
    std::process::exit(exit_code);
}
