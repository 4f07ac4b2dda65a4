//! CLI route: run context built from loaded configuration. Dispatches to the
//! aggregator and the presentation layer.

use crate::aggregator::Aggregator;
use crate::cli::parse::Cli;
use crate::cli::presentation::{format_summary_json, format_summary_text};
use crate::config::{ConfigLoader, GatherConfig};
use crate::error::ApiError;
use tracing::info;

/// Runtime context for CLI execution: the effective configuration.
pub struct RunContext {
    config: GatherConfig,
}

impl RunContext {
    /// Load configuration the way the CLI does: an explicit `--config` file
    /// wins, otherwise the layered workspace lookup.
    pub fn load_config(cli: &Cli) -> Result<GatherConfig, ApiError> {
        match cli.config {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path),
            None => ConfigLoader::load(&cli.workspace),
        }
    }

    /// Create run context from loaded configuration, folding in CLI overrides.
    pub fn new(mut config: GatherConfig, cli: &Cli) -> Result<Self, ApiError> {
        if let Some(ref output) = cli.output {
            config.aggregator.output_file = output.clone();
        }
        if let Some(ref marker) = cli.marker {
            config.aggregator.root_marker = marker.clone();
        }
        config.ensure_valid()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GatherConfig {
        &self.config
    }

    /// Execute the requested action and return what should go to stdout.
    pub fn execute(&self, cli: &Cli) -> Result<String, ApiError> {
        if cli.print_config {
            return self.config.to_toml();
        }

        let as_json = match cli.summary.as_str() {
            "json" => true,
            "text" => false,
            other => {
                return Err(ApiError::ConfigError(format!(
                    "Invalid summary format: {} (must be 'text' or 'json')",
                    other
                )))
            }
        };

        let path = cli
            .path
            .as_ref()
            .ok_or_else(|| ApiError::ConfigError("A directory to aggregate is required".into()))?;

        let summary = Aggregator::new(self.config.aggregator.clone()).aggregate(path)?;
        info!(output = %summary.output_file.display(), "Report complete");

        if as_json {
            format_summary_json(&summary)
        } else {
            Ok(format_summary_text(&summary))
        }
    }
}
