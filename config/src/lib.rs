use std::path::PathBuf;

use serde::de::DeserializeOwned;

mod error;

pub mod pattern;

pub use error::Error;
pub use pattern::PatternConfig;

const CONFIG_ENV_PREFIX: &str = "STARLINES";

pub trait Config: DeserializeOwned {
    const PREFIX: &'static str;

    /// Reads `STARLINES_<PREFIX>_*` variables, after merging an optional `.env`
    /// file from the working directory into the process environment.
    fn from_env() -> Result<Self, Error> {
        let prefix = format!("{}_{}", CONFIG_ENV_PREFIX, Self::PREFIX);
        load_dotenv()?;

        Ok(config::Config::builder()
            .add_source(config::Environment::with_prefix(&prefix).separator("_"))
            .build()?
            .try_deserialize()?)
    }
}

/// `.env` in the working directory. Parent directories are not searched.
#[doc(hidden)]
pub fn config_env_path() -> Result<PathBuf, Error> {
    let cwd = std::env::current_dir().map_err(dotenvy::Error::Io)?;
    Ok(cwd.join(".env"))
}

fn load_dotenv() -> Result<(), Error> {
    match dotenvy::from_path(config_env_path()?) {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err.into()),
    }
}
