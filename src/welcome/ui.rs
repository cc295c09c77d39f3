//! Console frontend for the welcome screen
//!
//! Offers the same actions as the bundled page and sends them through the
//! command channel, so both frontends behave identically.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::common::launch::Launcher;
use crate::ui::prelude::*;

use super::command::WelcomeCommand;
use super::dispatch::{Dispatcher, Outcome};
use super::script::PageState;

/// Links shown on the welcome page
pub const LINKS: &[(&str, &str)] = &[
    ("Visit the Antergos website", "https://antergos.com"),
    ("Ask the community forum", "https://forum.antergos.com"),
    ("Read the wiki", "https://antergos.com/wiki"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub command: WelcomeCommand,
}

impl MenuItem {
    fn new(label: impl Into<String>, command: WelcomeCommand) -> Self {
        Self {
            label: label.into(),
            command,
        }
    }
}

pub fn menu_items(state: &PageState) -> Vec<MenuItem> {
    let mut items = vec![
        MenuItem::new("Open GNOME help", WelcomeCommand::GnomeHelp),
        MenuItem::new("Open KDE help", WelcomeCommand::KdeHelp),
    ];

    items.extend(
        LINKS
            .iter()
            .map(|(label, url)| MenuItem::new(*label, WelcomeCommand::Link(url.to_string()))),
    );

    let marker = if state.autostart { "[x]" } else { "[ ]" };
    items.push(MenuItem::new(
        format!("{} Show on startup", marker),
        WelcomeCommand::ToggleStartup,
    ));
    items.push(MenuItem::new("Close", WelcomeCommand::Close));
    items
}

fn print_header(state: &PageState) {
    separator();
    println!("{}", "Welcome to Antergos".bold());
    let session = if state.live {
        "live session"
    } else {
        "installed system"
    };
    println!("{} ({})", state.arch, session);
    separator();
}

pub fn run_console<L: Launcher>(dispatcher: &mut Dispatcher<L>) -> Result<()> {
    emit(Level::Debug, "welcome.console.start", "Starting console menu", None);

    let mut cursor = 0;

    loop {
        let state = dispatcher.page_state();
        print_header(&state);

        let items = menu_items(&state);
        let selection = dialoguer::Select::new()
            .with_prompt("What would you like to do?")
            .items(
                &items
                    .iter()
                    .map(|item| item.label.as_str())
                    .collect::<Vec<_>>(),
            )
            .default(cursor.min(items.len() - 1))
            .interact_opt()
            .context("Failed to show selection dialog")?;

        let Some(index) = selection else {
            break;
        };
        cursor = index;

        if dispatcher.handle(&items[index].command) == Outcome::Quit {
            break;
        }
    }

    emit(Level::Debug, "welcome.close", "Closing welcome console", None);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::system::Architecture;

    fn state(autostart: bool) -> PageState {
        PageState {
            arch: Architecture::Bits64,
            autostart,
            live: false,
        }
    }

    #[test]
    fn menu_ends_with_toggle_and_close() {
        let items = menu_items(&state(false));
        let n = items.len();
        assert_eq!(n, 2 + LINKS.len() + 2);
        assert_eq!(items[n - 2].command, WelcomeCommand::ToggleStartup);
        assert_eq!(items[n - 2].label, "[ ] Show on startup");
        assert_eq!(items[n - 1].command, WelcomeCommand::Close);
    }

    #[test]
    fn toggle_label_follows_state() {
        let items = menu_items(&state(true));
        assert!(items.iter().any(|i| i.label == "[x] Show on startup"));
    }

    #[test]
    fn links_become_link_commands() {
        let items = menu_items(&state(false));
        assert_eq!(
            items[2].command,
            WelcomeCommand::Link("https://antergos.com".to_string())
        );
    }
}
