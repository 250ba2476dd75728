//! Locating the editor executable on disk.

mod probe;


pub use probe::{HostProbe, Probe};

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::LaunchError;
use crate::platform::{Platform, BUNDLE_BINARY_SUBPATH, COMMAND_NAME};

/// Inputs that decide where to look for the editor.
#[derive(Debug, Clone)]
pub struct Resolver {
    platform: Platform,
    // either the executable itself or the directory holding it
    override_path: Option<PathBuf>,
    // searched before the platform's built-in list
    extra_dirs: Vec<PathBuf>,
}

impl Resolver {
    /// Resolver with no override and no extra directories.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self {
            platform,
            override_path: None,
            extra_dirs: Vec::new(),
        }
    }

    /// Platform whose naming and install conventions apply.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Set the override location.
    #[must_use]
    pub fn with_override(mut self, path: Option<PathBuf>) -> Self {
        self.override_path = path;
        self
    }

    /// Set the extra search directories.
    #[must_use]
    pub fn with_extra_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.extra_dirs = dirs;
        self
    }

    /// Find the editor binary.
    ///
    /// Order: override, then `PATH`, then extra directories, then the
    /// platform's install directories. On macOS a resolved `.app` bundle is
    /// rewritten to the binary inside it.
    ///
    /// # Errors
    ///
    /// [`LaunchError::NotFound`] when no strategy yields a path.
    pub fn resolve(&self, probe: &impl Probe) -> Result<PathBuf, LaunchError> {
        let found = self.find(probe)?;
        Ok(self.descend_bundle(found))
    }

    fn find(&self, probe: &impl Probe) -> Result<PathBuf, LaunchError> {
        let name = self.platform.executable_name();
        let mut searched = Vec::new();

        if let Some(path) = &self.override_path {
            if probe.exists(path) {
                if self.is_executable(path, probe) {
                    debug!(path = %path.display(), "using override executable");
                    return Ok(path.clone());
                }
                let candidate = path.join(name);
                if !probe.exists(&candidate) {
                    warn!(path = %candidate.display(), "override directory has no editor binary");
                }
                debug!(path = %candidate.display(), "using override directory");
                return Ok(candidate);
            }
            warn!(path = %path.display(), "override location does not exist, ignoring");
            searched.push(path.clone());
        }

        if let Some(found) = probe.lookup(COMMAND_NAME) {
            debug!(path = %found.display(), "found on PATH");
            return Ok(found);
        }

        let builtin = self.platform.search_dirs().iter().map(Path::new);
        for dir in self.extra_dirs.iter().map(PathBuf::as_path).chain(builtin) {
            let candidate = dir.join(name);
            debug!(path = %candidate.display(), "probing");
            if probe.exists(&candidate) {
                return Ok(candidate);
            }
            searched.push(candidate);
        }

        Err(LaunchError::NotFound { name, searched })
    }

    fn is_executable(&self, path: &Path, probe: &impl Probe) -> bool {
        match self.platform {
            Platform::Windows => {
                self.platform.has_executable_suffix(path) && probe.is_executable(path)
            }
            Platform::MacOs => {
                self.platform.has_executable_suffix(path) || probe.is_executable(path)
            }
            Platform::Linux | Platform::Other => probe.is_executable(path),
        }
    }

    fn descend_bundle(&self, path: PathBuf) -> PathBuf {
        if self.platform.uses_bundles() && self.platform.has_executable_suffix(&path) {
            return path.join(BUNDLE_BINARY_SUBPATH);
        }
        path
    }
}
