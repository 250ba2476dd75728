use anyhow::Result;
use std::ffi::OsString;
use wonderland_launcher::{config::Config, launcher};

pub fn cmd_run(args: &[OsString]) -> Result<()> {
    let config = Config::load()?;
    launcher::launch(&config, args)?;
    Ok(())
}
