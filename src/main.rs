mod common;
mod settings;
mod ui;
mod welcome;

use clap::Parser;
use std::path::PathBuf;

use crate::ui::prelude::*;
use crate::welcome::{WelcomeCommands, WelcomeOptions};

/// Antergos welcome screen
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode
    #[arg(short, long, global = true)]
    debug: bool,

    /// Output format for messages
    #[arg(long, value_enum, default_value = "text", global = true)]
    output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Behave as if running from the live media
    #[arg(long, global = true)]
    force_live: bool,

    /// Directory containing index.html (overrides the settings file)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<WelcomeCommands>,
}

fn main() {
    let cli = Cli::parse();

    ui::init(cli.output, !cli.no_color);
    ui::set_debug_mode(cli.debug);
    emit(Level::Debug, "welcome.debug", "Debug mode is on", None);

    let options = WelcomeOptions {
        force_live: cli.force_live,
        data_dir: cli.data_dir,
    };

    if let Err(e) = welcome::handle_welcome_command(cli.command, &options) {
        emit(Level::Error, "welcome.error", &format!("{:#}", e), None);
        std::process::exit(1);
    }
}
