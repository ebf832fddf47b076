//! Configuration module for vulnscrape
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every field has a default, so the tool runs without
//! a config file at all.
//!
//! # Example
//!
//! ```no_run
//! use vulnscrape::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("vulnscrape.toml")).unwrap();
//! println!("Requests identify as: {}", config.http.user_agent);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FilterConfig, HttpConfig};

// Re-export parser functions
pub use parser::load_config;

// Re-export validation
pub use validation::validate;
