//! Console pattern printing: the row-count triangle and the greeting.

pub mod error;
pub mod greeting;
pub mod input;
pub mod pattern;

/// Configurations
pub mod config {
    pub use starlines_config::{Config, PatternConfig};
}

pub use error::Error;
pub use greeting::greet;
pub use input::{read_row_count, read_token};
pub use pattern::PatternPrinter;

pub(crate) const LOG_TARGET: &str = "starlines-core";
