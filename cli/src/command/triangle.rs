use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Args;
use starlines_config::{Config, PatternConfig};
use starlines_core::PatternPrinter;

use crate::LOG_TARGET;

#[derive(Debug, Args)]
pub struct TriangleArgs {
    /// Number of rows. Read from stdin after a prompt when omitted.
    #[arg(long, allow_negative_numbers = true)]
    pub rows: Option<i32>,
}

pub fn handle_command(args: TriangleArgs) -> anyhow::Result<()> {
    let printer = load_printer()?;

    match args.rows {
        Some(rows) => {
            let output = BufWriter::new(io::stdout().lock());
            printer
                .render(rows, output)
                .context("failed to print the triangle")
        }
        None => run_interactive(&printer),
    }
}

/// Prompts on stdout, reads the row count from stdin and prints the triangle.
pub fn run_triangle() -> anyhow::Result<()> {
    let printer = load_printer()?;
    run_interactive(&printer)
}

fn run_interactive(printer: &PatternPrinter) -> anyhow::Result<()> {
    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());

    printer
        .run(input, output)
        .context("failed to print the triangle")
}

fn load_printer() -> anyhow::Result<PatternPrinter> {
    let config = <PatternConfig as Config>::from_env().context("failed to load configuration")?;
    tracing::debug!(
        target: LOG_TARGET,
        prompt = %config.prompt,
        glyph = %config.glyph,
        "loaded pattern configuration",
    );

    Ok(PatternPrinter::new(config))
}
