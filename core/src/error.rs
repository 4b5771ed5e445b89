use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Row count is missing or is not an integer
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Reading from or writing to a console stream failed
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}
