use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Config error: {0}")]
    Config(#[from] gh_config::ConfigError),

    #[error("Invalid profile: {0}")]
    Core(#[from] gh_core::CoreError),

    #[error("Client error: {0}")]
    Client(#[from] gh_client::ClientError),

    #[error("Failed to prepare log directory {path}: {source}")]
    LogDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("{message}")]
    Unavailable { message: String },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
