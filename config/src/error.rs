#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}
