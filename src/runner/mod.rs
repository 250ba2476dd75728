//! Running the editor as a child process.

#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::error::LaunchError;

/// Run `path` with `args`, sharing this process's stdin, stdout and stderr,
/// and block until it exits.
///
/// # Errors
///
/// - [`LaunchError::Spawn`] if the process could not be started
/// - [`LaunchError::ChildExit`] if it exited with a non-zero code
/// - [`LaunchError::Terminated`] if it ended without an exit code
pub fn run(path: &Path, args: &[OsString]) -> Result<(), LaunchError> {
    debug!(path = %path.display(), args = ?args, "spawning editor");

    let status = Command::new(path)
        .args(args)
        .status()
        .map_err(|source| LaunchError::Spawn {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(status = %status, "editor exited");
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(LaunchError::ChildExit { code }),
        None => Err(LaunchError::Terminated),
    }
}
