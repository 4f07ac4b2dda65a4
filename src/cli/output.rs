//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{AggregateError, ApiError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Aggregate(AggregateError::Configuration { marker, .. }) => format!(
            "{}\nhint: pass a path inside the '{}' project or set --marker",
            e, marker
        ),
        _ => e.to_string(),
    }
}
