use std::io::Write;

use crate::Error;

pub const GREETING: &str = "Hello, World!";

/// Writes the greeting line.
pub fn greet<W: Write>(mut output: W) -> Result<(), Error> {
    writeln!(output, "{GREETING}")?;
    output.flush()?;
    Ok(())
}
