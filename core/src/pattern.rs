//! Left-aligned triangle printer.
//!
//! Line `i` (1-indexed) of the pattern holds `i` copies of the configured glyph. With
//! the default configuration, an input of `3` produces:
//!
//! ```text
//! Enter the number of rows: *
//! **
//! ***
//! ```

use std::io::{BufRead, Write};

use starlines_config::PatternConfig;

use crate::{input::read_row_count, Error, LOG_TARGET};

#[derive(Debug, Clone, Default)]
pub struct PatternPrinter {
    config: PatternConfig,
}

impl PatternPrinter {
    pub fn new(config: PatternConfig) -> Self {
        Self { config }
    }

    /// Prompts for a row count on `output`, reads it from `input` and prints the
    /// triangle.
    ///
    /// Nothing past the prompt is written if the row count cannot be read.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<(), Error> {
        output.write_all(self.config.prompt.as_bytes())?;
        output.flush()?;

        let rows = read_row_count(&mut input)?;
        self.render(rows, &mut output)
    }

    /// Prints `rows` pattern lines. A non-positive count prints nothing.
    pub fn render<W: Write>(&self, rows: i32, mut output: W) -> Result<(), Error> {
        let _span = tracing::debug_span!(target: LOG_TARGET, "render", rows).entered();

        let mut line = String::new();
        for _ in 1..=rows {
            line.push_str(&self.config.glyph);
            output.write_all(line.as_bytes())?;
            output.write_all(b"\n")?;
        }
        output.flush()?;

        tracing::debug!(target: LOG_TARGET, lines = rows.max(0), "pattern written");
        Ok(())
    }
}
