//! Configuration loading and management
//!
//! This module provides utilities for loading application configuration
//! from files and `MEETLINE_*` environment overrides.

pub mod loader;

// Re-export commonly used items
pub use loader::{apply_env_overrides, load, load_from_file, probe_config_paths};
