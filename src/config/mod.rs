//! Configuration module for sitegap
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every tunable constant of the inventory run lives here.
//!
//! # Example
//!
//! ```no_run
//! use sitegap::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitegap.toml")).unwrap();
//! println!("Crawl cap: {}", config.inventory.max_crawl_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, InventoryConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
