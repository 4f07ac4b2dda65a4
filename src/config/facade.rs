//! Config loader facade: assembles sources in precedence order and validates the result.

use super::sources::{environment, global_file, workspace_file};
use super::GatherConfig;
use crate::error::ApiError;
use config::Config;
use std::path::Path;
use tracing::debug;

/// Loads `GatherConfig` from layered sources.
///
/// Precedence (lowest to highest): built-in defaults, global config file,
/// workspace `gather.toml`, `GATHER_*` environment variables.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace directory
    pub fn load(workspace_root: &Path) -> Result<GatherConfig, ApiError> {
        let builder = Config::builder();
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: GatherConfig = builder.build()?.try_deserialize()?;
        config.ensure_valid()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from one explicit file (plus environment overrides)
    pub fn load_from_file(path: &Path) -> Result<GatherConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = Config::builder()
            .add_source(config::File::from(path.to_path_buf()).required(true));
        let builder = environment::add_to_builder(builder);

        let config: GatherConfig = builder.build()?.try_deserialize()?;
        config.ensure_valid()?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }
}
