//! JavaScript pushed into the loaded page

use serde::Serialize;

use crate::common::system::Architecture;

use super::config::WelcomeConfig;

/// Elements revealed when running from the live media
const LIVE_ONLY: &[&str] = &["#install", "#install-cli"];
/// Elements revealed on an installed system
const INSTALLED_ONLY: &[&str] = &["#build", "#donate"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub arch: Architecture,
    pub autostart: bool,
    pub live: bool,
}

impl From<&WelcomeConfig> for PageState {
    fn from(config: &WelcomeConfig) -> Self {
        Self {
            arch: config.arch(),
            autostart: config.autostart(),
            live: config.live(),
        }
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> String {
    // Plain strings and booleans always serialize
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

impl PageState {
    /// Scripts in the order they should run
    pub fn scripts(&self) -> Vec<String> {
        let mut scripts = vec![
            format!("$('#arch').html({})", json(self.arch.label())),
            format!(
                "$('#autostart').toggleClass('icon-check', {}).toggleClass('icon-check-empty', {})",
                json(&self.autostart),
                json(&!self.autostart)
            ),
        ];

        let reveal = if self.live { LIVE_ONLY } else { INSTALLED_ONLY };
        scripts.extend(
            reveal
                .iter()
                .map(|id| format!("$('{}').toggleClass('hide', false);", id)),
        );
        scripts
    }
}
