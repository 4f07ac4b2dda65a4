//! CLI domain: parse, route, output, and presentation only.
//! No aggregation logic here; route hands off to the aggregator.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::{format_summary_json, format_summary_text};
pub use route::RunContext;
