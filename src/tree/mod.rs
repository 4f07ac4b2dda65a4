//! Source tree traversal
//!
//! Locating the project anchor, classifying file names, and walking the
//! directory tree in a deterministic order.

pub mod filter;
pub mod path;
pub mod walker;
