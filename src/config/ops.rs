use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{Config, CONFIG_ENV};

/// Commented starting point written by `wle config init`. Parses to the defaults.
pub const TEMPLATE: &str = r#"# Wonderland Editor launcher configuration.
# WONDERLAND_EDITOR_PATH takes precedence over editor.path when set.

[editor]
# Install directory of the editor, or the executable itself.
# path = "/opt/wonderland/bin"

# Extra directories searched before the built-in install locations.
# search_dirs = ["/opt/wonderland"]
"#;

impl Config {
    /// `$WONDERLAND_CONFIG`, or `~/.config/wonderland/config.toml`.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("wonderland").join("config.toml"))
    }

    /// Load from [`Config::path`]; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write to [`Config::path`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Write [`TEMPLATE`] to `path` unless a file is already there.
    /// Returns whether anything was written.
    pub fn init_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        ensure_parent(path)?;
        std::fs::write(path, TEMPLATE)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(true)
    }

    /// Warning text when `editor.path` names something that is not on disk.
    #[must_use]
    pub fn missing_path_warning(&self) -> Option<String> {
        let path = self.editor.path.as_ref()?;
        if path.exists() {
            return None;
        }
        Some(format!(
            "Warning: editor.path {} does not exist; discovery will skip it",
            path.display()
        ))
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "editor.path" => Ok(self
                .editor
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "editor.search_dirs" => Ok(self
                .editor
                .search_dirs
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(",")),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path. Empty clears it; `search_dirs` is comma-separated.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "editor.path" => {
                self.editor.path = if value.is_empty() { None } else { Some(PathBuf::from(value)) };
            }
            "editor.search_dirs" => {
                self.editor.search_dirs = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from)
                    .collect();
            }
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    Ok(())
}
