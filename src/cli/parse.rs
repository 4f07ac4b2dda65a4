//! CLI parse: clap types for gather. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Gather - aggregate a project's source files into one text report
#[derive(Parser, Debug)]
#[command(name = "gather")]
#[command(about = "Aggregate a project's source files into one annotated text report")]
pub struct Cli {
    /// Directory to aggregate (must lie inside the marker directory)
    #[arg(required_unless_present = "print_config")]
    pub path: Option<PathBuf>,

    /// Report file to write (overrides configuration)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Project marker directory name (overrides configuration)
    #[arg(long)]
    pub marker: Option<String>,

    /// Directory searched for gather.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Summary format printed after the run (text or json)
    #[arg(long, default_value = "text")]
    pub summary: String,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
