//! Configuration System
//!
//! Layered configuration for the aggregator and the logging system. Built-in
//! defaults reproduce the classic behavior (Flutter-project extension set,
//! `roohbaru_app` marker, `codeFiles.txt` report); config files and
//! environment variables can override any of them.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod sources;

pub use facade::ConfigLoader;

/// Extensions included in the report when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".dart", ".py", ".js", ".java", ".cpp", ".ts", ".html", ".css",
];

/// File names that are never included, whatever their extension.
pub const DEFAULT_IGNORED_FILES: &[&str] = &["firebase_options.dart"];

/// Directory name that must appear in the start path.
pub const DEFAULT_ROOT_MARKER: &str = "roohbaru_app";

/// Report file name, relative to the current directory.
pub const DEFAULT_OUTPUT_FILE: &str = "codeFiles.txt";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatherConfig {
    /// What to include and where to write the report
    pub aggregator: AggregatorConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Aggregator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Suffixes a file name must end with to qualify (case-sensitive)
    pub allowed_extensions: Vec<String>,

    /// Exact file names that are skipped even when their extension qualifies
    pub ignored_file_names: Vec<String>,

    /// Directory name anchoring relative paths in the report
    pub root_marker: String,

    /// Report destination (overwritten on every run)
    pub output_file: PathBuf,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignored_file_names: DEFAULT_IGNORED_FILES.iter().map(|s| s.to_string()).collect(),
            root_marker: DEFAULT_ROOT_MARKER.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Aggregator(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Aggregator(msg) => write!(f, "Aggregator: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl AggregatorConfig {
    /// Validate aggregator settings
    pub fn validate(&self) -> Result<(), String> {
        if self.root_marker.trim().is_empty() {
            return Err("Root marker cannot be empty".to_string());
        }
        if self.root_marker.contains('/') || self.root_marker.contains('\\') {
            return Err(format!(
                "Root marker must be a single directory name, got '{}'",
                self.root_marker
            ));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err("Output file cannot be empty".to_string());
        }
        if self.allowed_extensions.is_empty() {
            return Err("At least one allowed extension is required".to_string());
        }
        for ext in &self.allowed_extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(format!(
                    "Invalid extension '{}' (must start with '.', e.g. '.rs')",
                    ext
                ));
            }
        }
        Ok(())
    }
}

impl GatherConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.aggregator.validate() {
            errors.push(ValidationError::Aggregator(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all errors into a single `ApiError`
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self).map_err(|e| ApiError::Format(e.to_string()))
    }
}
