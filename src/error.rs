//! Failure taxonomy for locating and running the editor.

use std::path::PathBuf;
use thiserror::Error;

/// Why a launch did not end in a clean exit.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No strategy produced a path to the editor.
    #[error("{name} not found on PATH or in: {}", display_paths(.searched))]
    NotFound {
        /// Executable name.
        name: &'static str,
        /// Every location probed, in order.
        searched: Vec<PathBuf>,
    },

    /// The OS refused to start the resolved path.
    #[error("failed to launch {}: {source}", .path.display())]
    Spawn {
        /// Resolved path.
        path: PathBuf,
        /// OS error.
        #[source]
        source: std::io::Error,
    },

    /// The editor ran and exited with a non-zero status.
    #[error("editor exited with code {code}")]
    ChildExit {
        /// Child's exit code.
        code: i32,
    },

    /// The editor was terminated without reporting an exit code.
    #[error("editor was terminated by a signal")]
    Terminated,
}

impl LaunchError {
    /// Exit code the launcher should terminate with for this error.
    ///
    /// The child's own code is mirrored when there is one; everything else maps to 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ChildExit { code } => *code,
            Self::NotFound { .. } | Self::Spawn { .. } | Self::Terminated => 1,
        }
    }

    /// Extra guidance printed after the error line, if any.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => Some(
                "Set WONDERLAND_EDITOR_PATH to the editor's install directory, \
                 or run: wle config set editor.path <dir>",
            ),
            _ => None,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "(no directories)".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
