use std::io::{self, BufRead};

use crate::{Error, LOG_TARGET};

/// Reads one whitespace-delimited token.
///
/// Leading whitespace is skipped. The whitespace byte that ends the token is left in
/// the stream, so the call returns as soon as a complete token is available instead
/// of waiting for the end of input. Returns `None` if the stream ends before any
/// non-whitespace byte.
pub fn read_token<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();

    loop {
        let buf = match input.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if buf.is_empty() {
            break;
        }

        let mut consumed = 0;
        let mut complete = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    complete = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            consumed += 1;
        }
        input.consume(consumed);

        if complete {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&token).into_owned()))
}

/// Reads the row count: a single decimal `i32` with an optional sign.
pub fn read_row_count<R: BufRead + ?Sized>(input: &mut R) -> Result<i32, Error> {
    let token = read_token(input)?.ok_or_else(|| {
        Error::InvalidInput("expected a row count, found end of input".to_owned())
    })?;

    let rows = token.parse::<i32>().map_err(|err| {
        Error::InvalidInput(format!("{token:?} is not a valid row count: {err}"))
    })?;

    tracing::debug!(target: LOG_TARGET, rows, "read row count");
    Ok(rows)
}
