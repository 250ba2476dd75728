//! Locate the Wonderland Editor on this machine and run it, relaying its exit status.

pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod platform;
pub mod resolve;
pub mod runner;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use error::LaunchError;
pub use platform::Platform;
pub use resolve::{HostProbe, Probe, Resolver};
