use std::path::{Path, PathBuf};

/// Filesystem and `PATH` queries used during resolution.
pub trait Probe {
    /// File or directory.
    fn exists(&self, path: &Path) -> bool;

    /// Regular file with an execute bit.
    fn is_executable(&self, path: &Path) -> bool;

    /// Resolve a bare command name through `PATH`.
    fn lookup(&self, command: &str) -> Option<PathBuf>;
}

/// The real disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl Probe for HostProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_executable(&self, path: &Path) -> bool {
        let Ok(meta) = std::fs::metadata(path) else {
            return false;
        };
        if !meta.is_file() {
            return false;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            meta.permissions().mode() & 0o111 != 0
        }
        #[cfg(not(unix))]
        {
            true
        }
    }

    fn lookup(&self, command: &str) -> Option<PathBuf> {
        which::which(command).ok()
    }
}
