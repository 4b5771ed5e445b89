//! # starlines
//!
//! Console pattern printer.
//!
//! ## Usage
//! ```sh
//! starlines triangle          # prompt for a row count on stdin
//! starlines triangle --rows 5 # skip the prompt
//! starlines hello
//! ```
//!
//! The `triangle` binary is the prompt-and-print program on its own, with no arguments.
//!
//! Diagnostics are written to stderr and filtered through `RUST_LOG` (default `warn`).
//! The prompt and glyph can be overridden with `STARLINES_PATTERN_PROMPT` and
//! `STARLINES_PATTERN_GLYPH`, either in the environment or in a `.env` file.

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod command;

pub(crate) const LOG_TARGET: &str = "starlines-cli";

#[derive(Debug, Parser)]
#[command(name = "starlines", bin_name = "starlines")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: command::Command,
}

/// Installs the diagnostics subscriber. Events go to stderr; stdout carries only
/// program output.
pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .pretty()
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}
