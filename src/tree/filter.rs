//! File classification against the allow-list and ignore-list

use crate::config::AggregatorConfig;

/// How a file found directly inside a visited directory is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    /// Name is on the ignore-list; never included
    Ignored,
    /// Extension is on the allow-list; content goes into the report
    Qualifying,
    /// Anything else
    Excluded,
}

/// Classifies file names. The ignore-list wins over the extension check.
#[derive(Debug, Clone)]
pub struct FileFilter {
    allowed_extensions: Vec<String>,
    ignored_file_names: Vec<String>,
}

impl FileFilter {
    pub fn new(allowed_extensions: Vec<String>, ignored_file_names: Vec<String>) -> Self {
        Self {
            allowed_extensions,
            ignored_file_names,
        }
    }

    pub fn from_config(config: &AggregatorConfig) -> Self {
        Self::new(
            config.allowed_extensions.clone(),
            config.ignored_file_names.clone(),
        )
    }

    pub fn classify(&self, file_name: &str) -> FileClass {
        if self.ignored_file_names.iter().any(|n| n == file_name) {
            FileClass::Ignored
        } else if self
            .allowed_extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
        {
            FileClass::Qualifying
        } else {
            FileClass::Excluded
        }
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::from_config(&AggregatorConfig::default())
    }
}
