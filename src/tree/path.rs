//! Project anchoring and report labels

use crate::error::AggregateError;
use std::path::{Component, Path, PathBuf};

/// Compute the project ancestor of `path`: the parent of the first component
/// named `marker`.
///
/// Report labels are relative to this directory, so they start with the
/// marker itself (e.g. `roohbaru_app/lib/screens`). Fails without touching
/// the filesystem when no component matches.
pub fn compute_project_ancestor(path: &Path, marker: &str) -> Result<PathBuf, AggregateError> {
    let components: Vec<Component<'_>> = path.components().collect();
    let index = components
        .iter()
        .position(|c| matches!(c, Component::Normal(name) if *name == marker))
        .ok_or_else(|| AggregateError::Configuration {
            path: path.to_path_buf(),
            marker: marker.to_string(),
        })?;

    Ok(components[..index].iter().collect())
}

/// Render `path` relative to `ancestor`, always with `/` separators.
///
/// Falls back to the full path when `path` does not live under `ancestor`.
pub fn relative_label(path: &Path, ancestor: &Path) -> String {
    let relative = path.strip_prefix(ancestor).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir => None,
            Component::RootDir | Component::Prefix(_) => None,
        })
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
