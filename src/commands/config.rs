use anyhow::Result;
use clap::Subcommand;
use wonderland_launcher::config::Config;
use wonderland_launcher::launcher::{self, OVERRIDE_ENV};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file and the editor override that will be used
    Show,
    /// Print the configuration file path
    Path,
    /// Write a commented config template (never overwrites)
    Init,
    /// Set editor.path or editor.search_dirs (comma-separated); empty clears
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show(&Config::load()?)?,
        ConfigAction::Path => println!("{}", Config::path()?.display()),
        ConfigAction::Init => {
            let path = Config::path()?;
            if Config::init_at(&path)? {
                println!("Wrote config template to {}", path.display());
            } else {
                eprintln!("Config already exists at {}, leaving it alone", path.display());
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set_value(&key, &value)?;
            if key == "editor.path" {
                if let Some(warning) = config.missing_path_warning() {
                    eprintln!("{warning}");
                }
            }
            config.save()?;
            println!("Set {key} = {value}");
        }
        ConfigAction::Get { key } => println!("{}", Config::load()?.get_value(&key)?),
    }
    Ok(())
}

fn show(config: &Config) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);

    match launcher::effective_override(std::env::var_os(OVERRIDE_ENV), config) {
        Some((path, source)) => {
            let state = if path.exists() { "" } else { " (missing, will be skipped)" };
            println!("\n# override: {} from {source}{state}", path.display());
        }
        None => println!("\n# override: none, searching PATH and install directories"),
    }
    Ok(())
}
