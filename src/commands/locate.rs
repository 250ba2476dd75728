use anyhow::Result;
use wonderland_launcher::{config::Config, launcher};

/// Print the resolved editor path on stdout so scripts can capture it.
pub fn cmd_locate() -> Result<()> {
    let config = Config::load()?;
    let path = launcher::locate(&config)?;
    println!("{}", path.display());
    Ok(())
}
