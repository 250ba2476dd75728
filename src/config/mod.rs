//! Persistent launcher settings stored as TOML.

mod ops;

pub use ops::TEMPLATE;


use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that points at an alternate config file.
pub const CONFIG_ENV: &str = "WONDERLAND_CONFIG";

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[editor]`
    pub editor: EditorConfig,
}

/// The `[editor]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Executable or the directory holding it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Searched before the built-in install locations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_dirs: Vec<PathBuf>,
}
