//! Configuration module for Thread-Trawl
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so running without a file is the normal case.
//!
//! # Example
//!
//! ```no_run
//! use thread_trawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("trawl.toml")).unwrap();
//! println!("Harvesting {} stories", config.forum.story_limit);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, FilterConfig, ForumConfig, OutputConfig};

// Re-export parser functions
pub use parser::{load_config, load_or_default, parse_config};
