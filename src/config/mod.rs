//! Configuration module for Sharetree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SHARETREE_*)
//! 3. Config file (`--config`, or ~/.config/sharetree/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::ConfigWarning;
pub use types::{BrowseConfig, ColorMode, Config, OutputConfig, SizeUnits};
