use crate::common::launch::Launcher;
use crate::settings::WelcomeSettings;
use crate::ui::prelude::*;

use super::command::WelcomeCommand;
use super::config::WelcomeConfig;
use super::script::PageState;

/// What the host should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// State changed; push it to the page again
    Refresh,
    Quit,
}

/// Programs started for the help commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpViewers {
    pub gnome: String,
    pub kde: String,
}

impl From<&WelcomeSettings> for HelpViewers {
    fn from(settings: &WelcomeSettings) -> Self {
        Self {
            gnome: settings.gnome_help.clone(),
            kde: settings.kde_help.clone(),
        }
    }
}

pub struct Dispatcher<L: Launcher> {
    config: WelcomeConfig,
    launcher: L,
    help: HelpViewers,
}

impl<L: Launcher> Dispatcher<L> {
    pub fn new(config: WelcomeConfig, launcher: L, help: HelpViewers) -> Self {
        Self {
            config,
            launcher,
            help,
        }
    }

    pub fn config(&self) -> &WelcomeConfig {
        &self.config
    }

    pub fn page_state(&self) -> PageState {
        PageState::from(&self.config)
    }

    /// Route a navigation URI; `None` when it is not a command.
    pub fn handle_uri(&mut self, uri: &str) -> Option<Outcome> {
        WelcomeCommand::parse(uri).map(|cmd| self.handle(&cmd))
    }

    pub fn handle(&mut self, command: &WelcomeCommand) -> Outcome {
        emit(
            Level::Debug,
            "welcome.command",
            &format!("Handling {}", command),
            None,
        );

        match command {
            WelcomeCommand::GnomeHelp => {
                let program = self.help.gnome.clone();
                self.launch(&program);
                Outcome::Continue
            }
            WelcomeCommand::KdeHelp => {
                let program = self.help.kde.clone();
                self.launch(&program);
                Outcome::Continue
            }
            WelcomeCommand::Close => Outcome::Quit,
            WelcomeCommand::ToggleStartup => {
                let enabled = self.config.toggle_autostart();
                emit(
                    Level::Debug,
                    "welcome.autostart.toggle",
                    &format!(
                        "Autostart is now {}",
                        if enabled { "enabled" } else { "disabled" }
                    ),
                    None,
                );
                Outcome::Refresh
            }
            WelcomeCommand::Link(url) => {
                if let Err(e) = self.launcher.open_url(url) {
                    emit(
                        Level::Error,
                        "welcome.link.error",
                        &format!("Failed to open {}: {:#}", url, e),
                        None,
                    );
                }
                Outcome::Continue
            }
            WelcomeCommand::Unknown(name) => {
                emit(
                    Level::Info,
                    "welcome.command.unknown",
                    &format!("Unknown command: {}", name),
                    None,
                );
                Outcome::Continue
            }
        }
    }

    fn launch(&self, program: &str) {
        if let Err(e) = self.launcher.spawn(program, &[]) {
            emit(
                Level::Error,
                "welcome.launch.error",
                &format!("Failed to launch {}: {:#}", program, e),
                None,
            );
        }
    }
}
