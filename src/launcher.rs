//! Glue between configuration, resolution and the child process.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::LaunchError;
use crate::platform::{Platform, COMMAND_NAME};
use crate::resolve::{HostProbe, Probe, Resolver};
use crate::runner;

/// Environment variable naming the editor's install location.
pub const OVERRIDE_ENV: &str = "WONDERLAND_EDITOR_PATH";

/// Where the override location came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideSource {
    /// `WONDERLAND_EDITOR_PATH`
    Env,
    /// `editor.path` in the config file
    Config,
}

impl std::fmt::Display for OverrideSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env => f.write_str(OVERRIDE_ENV),
            Self::Config => f.write_str("editor.path in config"),
        }
    }
}

/// The override that will be used and its source. A non-empty environment
/// value wins over the config file.
#[must_use]
pub fn effective_override(
    env_value: Option<OsString>,
    config: &Config,
) -> Option<(PathBuf, OverrideSource)> {
    env_value
        .filter(|v| !v.is_empty())
        .map(|v| (PathBuf::from(v), OverrideSource::Env))
        .or_else(|| {
            config
                .editor
                .path
                .clone()
                .map(|p| (p, OverrideSource::Config))
        })
}

/// Override path only, see [`effective_override`].
#[must_use]
pub fn pick_override(env_value: Option<OsString>, config: &Config) -> Option<PathBuf> {
    effective_override(env_value, config).map(|(path, _)| path)
}

/// Build a resolver from an explicit environment value and `config`.
#[must_use]
pub fn resolver_from(platform: Platform, env_value: Option<OsString>, config: &Config) -> Resolver {
    Resolver::new(platform)
        .with_override(pick_override(env_value, config))
        .with_extra_dirs(config.editor.search_dirs.clone())
}

/// Resolver for the host platform and the current process environment.
#[must_use]
pub fn resolver(config: &Config) -> Resolver {
    resolver_from(Platform::current(), std::env::var_os(OVERRIDE_ENV), config)
}

/// Resolve the editor path on this machine.
///
/// # Errors
///
/// [`LaunchError::NotFound`] when the editor cannot be located.
pub fn locate(config: &Config) -> Result<PathBuf, LaunchError> {
    locate_with(&resolver(config), &HostProbe)
}

/// Resolve with an explicit resolver and probe, announcing the result.
///
/// # Errors
///
/// [`LaunchError::NotFound`] when the editor cannot be located.
pub fn locate_with(resolver: &Resolver, probe: &impl Probe) -> Result<PathBuf, LaunchError> {
    tracing::debug!(platform = %resolver.platform(), "resolving editor");
    let path = resolver.resolve(probe)?;
    eprintln!("Found {COMMAND_NAME} at: {}", path.display());
    Ok(path)
}

/// Locate the editor and run it with `args`, waiting for it to exit.
///
/// # Errors
///
/// Any [`LaunchError`]; nothing is spawned when the editor is not found.
pub fn launch(config: &Config, args: &[OsString]) -> Result<(), LaunchError> {
    launch_with(&resolver(config), &HostProbe, args)
}

/// [`launch`] with an explicit resolver and probe.
///
/// # Errors
///
/// Any [`LaunchError`]; nothing is spawned when resolution fails.
pub fn launch_with(
    resolver: &Resolver,
    probe: &impl Probe,
    args: &[OsString],
) -> Result<(), LaunchError> {
    let path = locate_with(resolver, probe)?;
    runner::run(&path, args)
}

/// Print `err` for the user and return the exit code to terminate with.
#[must_use]
pub fn report(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<LaunchError>() {
        Some(launch) => {
            eprintln!("Error: {launch}");
            if let Some(hint) = launch.hint() {
                eprintln!("{hint}");
            }
            launch.exit_code()
        }
        None => {
            eprintln!("Error: {err:#}");
            1
        }
    }
}
