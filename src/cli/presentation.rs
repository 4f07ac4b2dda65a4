//! CLI presentation: text and json formatters for the run summary.

use crate::aggregator::AggregateSummary;
use crate::error::ApiError;
use owo_colors::OwoColorize;

pub fn format_summary_text(summary: &AggregateSummary) -> String {
    let mut s = format!(
        "{} {}\n  Directories: {} ({} without code files)\n  Files written: {} of {}\n  Ignored files: {}",
        "Report written:".green().bold(),
        summary.output_file.display(),
        summary.directories_visited,
        summary.directories_without_code,
        summary.files_written,
        summary.qualifying_files,
        summary.ignored_files,
    );
    if !summary.skipped.is_empty() {
        s.push_str(&format!(
            "\n\n{}",
            format!("Skipped ({}):", summary.skipped.len()).yellow()
        ));
        for skipped in &summary.skipped {
            s.push_str(&format!("\n  - {}: {}", skipped.path, skipped.reason));
        }
    }
    if !summary.unreadable_directories.is_empty() {
        s.push_str(&format!(
            "\n\n{}",
            format!("Unreadable folders ({}):", summary.unreadable_directories.len()).yellow()
        ));
        for dir in &summary.unreadable_directories {
            s.push_str(&format!("\n  - {}", dir));
        }
    }
    s
}

pub fn format_summary_json(summary: &AggregateSummary) -> Result<String, ApiError> {
    serde_json::to_string_pretty(summary).map_err(|e| ApiError::Format(e.to_string()))
}
