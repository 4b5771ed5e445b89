use std::io;

use anyhow::Context;

pub fn handle_command() -> anyhow::Result<()> {
    starlines_core::greet(io::stdout().lock()).context("failed to print the greeting")
}
