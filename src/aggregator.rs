//! Directory aggregation
//!
//! Walks a project tree once and writes every qualifying source file into a
//! single report, one block per file, with a placeholder line for each folder
//! that holds no code. Fatal problems (bad start path, unwritable report)
//! abort the run; a file that cannot be read only loses its block.

use crate::config::AggregatorConfig;
use crate::error::{AggregateError, FileReadError};
use crate::report::ReportWriter;
use crate::tree::filter::{FileClass, FileFilter};
use crate::tree::path::{compute_project_ancestor, relative_label};
use crate::tree::walker::Walker;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A qualifying file left out of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Report label of the file
    pub path: String,
    /// Why it could not be read
    pub reason: String,
}

/// What a run did
#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregateSummary {
    pub output_file: PathBuf,
    pub directories_visited: usize,
    pub directories_without_code: usize,
    pub qualifying_files: usize,
    pub files_written: usize,
    pub ignored_files: usize,
    /// File blocks plus placeholder lines
    pub blocks_written: usize,
    pub skipped: Vec<SkippedFile>,
    /// Folders whose entries could not be listed; they get no line in the report
    pub unreadable_directories: Vec<String>,
}

impl AggregateSummary {
    fn new(output_file: PathBuf) -> Self {
        Self {
            output_file,
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.unreadable_directories.is_empty()
    }
}

/// Builds the aggregated report for a directory tree
pub struct Aggregator {
    config: AggregatorConfig,
    filter: FileFilter,
}

impl Aggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        let filter = FileFilter::from_config(&config);
        Self { config, filter }
    }

    /// Aggregate everything under `start_path` into the configured output file.
    ///
    /// The marker check happens before any filesystem access, so a rejected
    /// path leaves no report behind. The report is truncated, never appended to.
    pub fn aggregate(&self, start_path: &Path) -> Result<AggregateSummary, AggregateError> {
        let ancestor = compute_project_ancestor(start_path, &self.config.root_marker)?;

        if !start_path.is_dir() {
            return Err(AggregateError::InvalidRoot {
                path: start_path.to_path_buf(),
            });
        }

        let output_path = self.config.output_file.clone();
        let output_err = |source| AggregateError::Output {
            path: output_path.clone(),
            source,
        };

        let file = create_output(&output_path).map_err(output_err)?;
        let output_canonical = dunce::canonicalize(&output_path).ok();
        let mut writer = ReportWriter::new(BufWriter::new(file));
        let mut summary = AggregateSummary::new(output_path.clone());

        info!(
            root = %start_path.display(),
            output = %output_path.display(),
            "Aggregating source files"
        );

        let outcome = Walker::new(start_path.to_path_buf()).walk();
        for path in &outcome.unreadable {
            let dir_label = relative_label(path, &ancestor);
            warn!(directory = %dir_label, "Could not list folder, omitting it");
            summary.unreadable_directories.push(dir_label);
        }

        for listing in outcome.listings {
            summary.directories_visited += 1;
            let dir_label = relative_label(&listing.path, &ancestor);

            let mut code_files = Vec::new();
            for name in &listing.files {
                let Some(file_name) = name.to_str() else {
                    debug!(file = ?name, "Skipping non UTF-8 file name");
                    continue;
                };
                match self.filter.classify(file_name) {
                    FileClass::Ignored => {
                        info!("Skipping ignored file: {}", file_name);
                        summary.ignored_files += 1;
                    }
                    FileClass::Qualifying => {
                        let path = listing.path.join(name);
                        if is_output_file(&path, output_canonical.as_deref()) {
                            debug!(file = %path.display(), "Skipping the report itself");
                            continue;
                        }
                        code_files.push(path);
                    }
                    FileClass::Excluded => {}
                }
            }

            if code_files.is_empty() {
                info!("No code files in: {}", dir_label);
                writer.write_placeholder(&dir_label).map_err(output_err)?;
                summary.directories_without_code += 1;
                continue;
            }

            for path in code_files {
                summary.qualifying_files += 1;
                let file_label = relative_label(&path, &ancestor);
                info!("Processing: {}", file_label);

                match read_code_file(&path) {
                    Ok(content) => {
                        writer
                            .write_file_block(&file_label, &content)
                            .map_err(output_err)?;
                        summary.files_written += 1;
                    }
                    Err(e) => {
                        warn!(file = %file_label, error = %e, "Could not read file, omitting it");
                        summary.skipped.push(SkippedFile {
                            path: file_label,
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        summary.blocks_written = writer.blocks_written();
        writer.finish().map_err(output_err)?;

        info!(
            directories = summary.directories_visited,
            files = summary.files_written,
            skipped = summary.skipped.len(),
            "All folders processed and code files written to {}",
            output_path.display()
        );

        Ok(summary)
    }
}

/// Aggregate `start_path` into `output_file` with the default settings.
pub fn aggregate(
    start_path: &Path,
    output_file: impl AsRef<Path>,
) -> Result<AggregateSummary, AggregateError> {
    let config = AggregatorConfig {
        output_file: output_file.as_ref().to_path_buf(),
        ..AggregatorConfig::default()
    };
    Aggregator::new(config).aggregate(start_path)
}

/// Read a whole file as UTF-8 text, with `\r\n` and lone `\r` line endings
/// turned into `\n`
pub fn read_code_file(path: &Path) -> Result<String, FileReadError> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    Ok(normalize_newlines(text))
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn create_output(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    File::create(path)
}

fn is_output_file(path: &Path, output_canonical: Option<&Path>) -> bool {
    match output_canonical {
        Some(output) => dunce::canonicalize(path)
            .map(|p| p == output)
            .unwrap_or(false),
        None => false,
    }
}
