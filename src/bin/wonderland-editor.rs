//! `wonderland-editor`: forwards every argument verbatim to the Wonderland Editor
//! and exits with the editor's exit code.

use std::ffi::OsString;
use wonderland_launcher::{config::Config, launcher, logging};

fn main() {
    logging::init();
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    if let Err(err) = run(&args) {
        std::process::exit(launcher::report(&err));
    }
}

fn run(args: &[OsString]) -> anyhow::Result<()> {
    let config = Config::load()?;
    launcher::launch(&config, args)?;
    Ok(())
}
