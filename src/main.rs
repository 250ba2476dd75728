//! `wle`: run, locate and configure the Wonderland Editor launcher.

mod commands;

use clap::{Parser, Subcommand};
use std::ffi::OsString;

use commands::config::{cmd_config, ConfigAction};
use commands::locate::cmd_locate;
use commands::run::cmd_run;
use wonderland_launcher::{launcher, logging};

#[derive(Parser)]
#[command(name = "wle", version, about = "Locate and launch the Wonderland Editor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the editor, forwarding all remaining arguments to it
    ///
    /// A leading `--` is consumed here and never reaches the editor; use
    /// `wonderland-editor` to forward arguments completely untouched.
    Run {
        /// Arguments passed through to the editor, e.g. --project demo.wlp
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },

    /// Print the path of the editor that would be launched
    Locate,

    /// Manage launcher configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { args } => cmd_run(&args),
        Commands::Locate => cmd_locate(),
        Commands::Config { action } => cmd_config(action),
    };

    if let Err(err) = result {
        std::process::exit(launcher::report(&err));
    }
}
