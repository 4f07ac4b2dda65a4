//! Workspace config file source: <workspace>/gather.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Name of the per-workspace config file.
pub const WORKSPACE_CONFIG_FILE: &str = "gather.toml";

/// Add the workspace config file to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if config_path.is_file() {
        return Ok(builder.add_source(File::from(config_path).required(false)));
    }
    Ok(builder)
}
