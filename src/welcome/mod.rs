//! Antergos welcome screen
//!
//! A bundled web page talks to the host through `cmd://` navigations; the
//! host answers by launching helpers, toggling the autostart symlink and
//! pushing state back into the page.

pub mod command;
pub mod commands;
pub mod config;
pub mod data;
pub mod dispatch;
pub mod page;
pub mod script;
mod ui;
#[cfg(feature = "webview")]
mod window;

pub use commands::{WelcomeCommands, WelcomeOptions, handle_welcome_command};
