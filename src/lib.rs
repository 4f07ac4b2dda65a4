//! Gather: Source Snapshot Aggregation
//!
//! Walks a project directory and concatenates every qualifying source file
//! into one annotated text report, for review or sharing.

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod tree;

pub use aggregator::{aggregate, AggregateSummary, Aggregator, SkippedFile};
pub use config::{AggregatorConfig, ConfigLoader, GatherConfig};
pub use error::{AggregateError, ApiError, FileReadError};
