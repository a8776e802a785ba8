use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario {path}")]
    Scenario {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to load carousel configuration")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Invalid(#[from] slidetrack_core::ConfigError),
}
