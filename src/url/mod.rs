//! URL handling module for Thread-Trawl
//!
//! This module provides URL canonicalization and the literal hostname matching
//! used by the classifier.

mod matcher;
mod normalize;

// Re-export main functions
pub use matcher::{host_contains_infix, host_has_any_suffix, host_has_suffix};
pub use normalize::{normalize_url, url_path, NormalizedUrl};
