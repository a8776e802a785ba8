//! Carousel configuration for the simulator
//!
//! Layers an optional TOML file under `SLIDETRACK__*` environment variables.
//! Nested keys use `__`: `SLIDETRACK__BREAKPOINTS__SINGLE_MAX=480`.

use std::collections::HashMap;
use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use slidetrack_core::CarouselConfig;

use crate::error::LoadError;

pub const ENV_PREFIX: &str = "SLIDETRACK";

pub fn load(path: Option<&Path>) -> Result<CarouselConfig, LoadError> {
    load_with_env(path, None)
}

/// Like [`load`], reading overrides from `env` instead of the process
/// environment when given.
pub fn load_with_env(
    path: Option<&Path>,
    env: Option<HashMap<String, String>>,
) -> Result<CarouselConfig, LoadError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml));
    }
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .source(env),
    );

    let config: CarouselConfig = builder.build()?.try_deserialize()?;
    config.validate()?;
    tracing::debug!(?config, "carousel configuration loaded");
    Ok(config)
}
