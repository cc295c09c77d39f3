//! Command handling for welcome application

use anyhow::Result;
use clap::Subcommand;
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

use crate::common::launch::SystemLauncher;
use crate::settings::WelcomeSettings;
use crate::ui::prelude::*;

use super::command::WelcomeCommand;
use super::config::WelcomeConfig;
use super::data::DataDir;
use super::dispatch::{Dispatcher, HelpViewers, Outcome};

#[derive(Subcommand, Debug, Clone)]
pub enum WelcomeCommands {
    /// Open the welcome screen (default)
    Show {
        /// Use the terminal menu instead of the window
        #[arg(long)]
        console: bool,
    },
    /// Inspect or change whether the welcome screen opens at login
    Autostart {
        #[command(subcommand)]
        action: AutostartAction,
    },
    /// Show the detected system state
    Info,
    /// Run a cmd:// URI as if the page had navigated to it
    Exec {
        /// Command URI, e.g. cmd://toggle-startup
        uri: String,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutostartAction {
    Status,
    Enable,
    Disable,
    Toggle,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0} is not a command URI (expected cmd://<name>)")]
    NotACommand(String),
}

/// Global flags shared by all subcommands
#[derive(Debug, Clone, Default)]
pub struct WelcomeOptions {
    pub force_live: bool,
    pub data_dir: Option<PathBuf>,
}

pub fn handle_welcome_command(
    command: Option<WelcomeCommands>,
    options: &WelcomeOptions,
) -> Result<()> {
    let settings = WelcomeSettings::load()?;
    let config = WelcomeConfig::detect(options.force_live, &settings.desktop_entry)?;

    match command.unwrap_or(WelcomeCommands::Show { console: false }) {
        WelcomeCommands::Show { console } => show(config, &settings, options, console),
        WelcomeCommands::Autostart { action } => autostart(config, action),
        WelcomeCommands::Info => info(&config, &settings, options),
        WelcomeCommands::Exec { uri } => exec(config, &settings, &uri),
    }
}

fn dispatcher(config: WelcomeConfig, settings: &WelcomeSettings) -> Dispatcher<SystemLauncher> {
    Dispatcher::new(
        config,
        SystemLauncher::new(settings.browser.clone()),
        HelpViewers::from(settings),
    )
}

fn show(
    config: WelcomeConfig,
    settings: &WelcomeSettings,
    options: &WelcomeOptions,
    console: bool,
) -> Result<()> {
    // A missing data directory is fatal for every frontend
    let override_dir = options.data_dir.as_deref().or(settings.data_dir.as_deref());
    let data = DataDir::resolve(override_dir)?;
    emit(
        Level::Debug,
        "welcome.show.data",
        &format!("Serving {}", data.index_uri()),
        None,
    );

    let mut dispatcher = dispatcher(config, settings);
    if !console {
        return open_window(dispatcher, &data, settings);
    }
    super::ui::run_console(&mut dispatcher)
}

#[cfg(feature = "webview")]
fn open_window(
    dispatcher: Dispatcher<SystemLauncher>,
    data: &DataDir,
    settings: &WelcomeSettings,
) -> Result<()> {
    super::window::run_window(dispatcher, data, settings)
}

#[cfg(not(feature = "webview"))]
fn open_window(
    mut dispatcher: Dispatcher<SystemLauncher>,
    _data: &DataDir,
    _settings: &WelcomeSettings,
) -> Result<()> {
    emit(
        Level::Debug,
        "welcome.show.console",
        "Built without the webview feature, using the console menu",
        None,
    );
    super::ui::run_console(&mut dispatcher)
}

fn autostart_message(enabled: bool) -> String {
    format!(
        "Autostart is {}",
        if enabled { "enabled" } else { "disabled" }
    )
}

fn autostart(mut config: WelcomeConfig, action: AutostartAction) -> Result<()> {
    let before = config.autostart();
    let enabled = match action {
        AutostartAction::Status => before,
        AutostartAction::Enable => config.set_autostart(true),
        AutostartAction::Disable => config.set_autostart(false),
        AutostartAction::Toggle => config.toggle_autostart(),
    };

    let requested = match action {
        AutostartAction::Status => before,
        AutostartAction::Enable => true,
        AutostartAction::Disable => false,
        AutostartAction::Toggle => !before,
    };

    let data = Some(json!({
        "autostart": enabled,
        "link": config.autostart_paths().link,
    }));

    if enabled == requested {
        let level = if action == AutostartAction::Status {
            Level::Info
        } else {
            Level::Success
        };
        emit(level, "welcome.autostart", &autostart_message(enabled), data);
    } else {
        emit(
            Level::Warn,
            "welcome.autostart.unchanged",
            &format!(
                "Could not change {}; {}",
                config.autostart_paths().link.display(),
                autostart_message(enabled).to_lowercase()
            ),
            data,
        );
    }
    Ok(())
}

fn info(config: &WelcomeConfig, settings: &WelcomeSettings, options: &WelcomeOptions) -> Result<()> {
    let override_dir = options.data_dir.as_deref().or(settings.data_dir.as_deref());
    let data_dir = match DataDir::resolve(override_dir) {
        Ok(dir) => Some(dir),
        Err(e) => {
            emit(Level::Debug, "welcome.info.data", &e.to_string(), None);
            None
        }
    };

    let paths = config.autostart_paths();
    let lines = [
        format!("Architecture: {}", config.arch()),
        format!("Live session: {}", if config.live() { "yes" } else { "no" }),
        format!("{} ({})", autostart_message(config.autostart()), paths.link.display()),
        format!(
            "Data directory: {}",
            data_dir
                .as_ref()
                .map(|d| d.root.display().to_string())
                .unwrap_or_else(|| "not found".to_string())
        ),
    ];

    match get_output_format() {
        OutputFormat::Json => emit(
            Level::Info,
            "welcome.info",
            &lines.join("; "),
            Some(json!({
                "arch": config.arch(),
                "live": config.live(),
                "autostart": config.autostart(),
                "autostart_link": paths.link,
                "autostart_target": paths.target,
                "data_dir": data_dir,
            })),
        ),
        OutputFormat::Text => {
            for line in &lines {
                emit(Level::Info, "welcome.info", line, None);
            }
        }
    }
    Ok(())
}

fn exec(config: WelcomeConfig, settings: &WelcomeSettings, uri: &str) -> Result<()> {
    let command =
        WelcomeCommand::parse(uri).ok_or_else(|| CommandError::NotACommand(uri.to_string()))?;

    let mut dispatcher = dispatcher(config, settings);
    match dispatcher.handle(&command) {
        Outcome::Refresh => emit(
            Level::Success,
            "welcome.exec.refresh",
            &autostart_message(dispatcher.config().autostart()),
            Some(json!(dispatcher.page_state())),
        ),
        Outcome::Quit => emit(
            Level::Debug,
            "welcome.exec.quit",
            "Close has no effect outside the window",
            None,
        ),
        Outcome::Continue => {}
    }
    Ok(())
}
