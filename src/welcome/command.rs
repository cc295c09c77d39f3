//! The `cmd://` channel between the page and the host

use std::fmt;

pub const COMMAND_SCHEME: &str = "cmd://";
const LINK_PREFIX: &str = "link?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WelcomeCommand {
    GnomeHelp,
    KdeHelp,
    Close,
    ToggleStartup,
    /// Open the URL in the system browser
    Link(String),
    Unknown(String),
}

impl WelcomeCommand {
    /// Parse a navigation URI. Returns `None` for ordinary page loads.
    pub fn parse(uri: &str) -> Option<Self> {
        let uri = match uri.find('#') {
            Some(pos) if pos > 0 => &uri[..pos],
            _ => uri,
        };

        let name = uri.strip_prefix(COMMAND_SCHEME)?;
        Some(Self::from_name(name))
    }

    fn from_name(name: &str) -> Self {
        match name {
            "gnome-help" => WelcomeCommand::GnomeHelp,
            "kde-help" => WelcomeCommand::KdeHelp,
            "close" => WelcomeCommand::Close,
            "toggle-startup" => WelcomeCommand::ToggleStartup,
            _ => match name.strip_prefix(LINK_PREFIX) {
                Some(url) => WelcomeCommand::Link(url.to_string()),
                None => WelcomeCommand::Unknown(name.to_string()),
            },
        }
    }
}

impl fmt::Display for WelcomeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WelcomeCommand::GnomeHelp => write!(f, "{}gnome-help", COMMAND_SCHEME),
            WelcomeCommand::KdeHelp => write!(f, "{}kde-help", COMMAND_SCHEME),
            WelcomeCommand::Close => write!(f, "{}close", COMMAND_SCHEME),
            WelcomeCommand::ToggleStartup => write!(f, "{}toggle-startup", COMMAND_SCHEME),
            WelcomeCommand::Link(url) => write!(f, "{}{}{}", COMMAND_SCHEME, LINK_PREFIX, url),
            WelcomeCommand::Unknown(name) => write!(f, "{}{}", COMMAND_SCHEME, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_loads_are_not_commands() {
        assert_eq!(WelcomeCommand::parse("file:///usr/share/antergos-welcome/index.html"), None);
        assert_eq!(WelcomeCommand::parse("https://antergos.com"), None);
    }

    #[test]
    fn literal_names() {
        assert_eq!(WelcomeCommand::parse("cmd://gnome-help"), Some(WelcomeCommand::GnomeHelp));
        assert_eq!(WelcomeCommand::parse("cmd://kde-help"), Some(WelcomeCommand::KdeHelp));
        assert_eq!(WelcomeCommand::parse("cmd://close"), Some(WelcomeCommand::Close));
        assert_eq!(
            WelcomeCommand::parse("cmd://toggle-startup"),
            Some(WelcomeCommand::ToggleStartup)
        );
    }

    #[test]
    fn fragment_is_dropped() {
        assert_eq!(WelcomeCommand::parse("cmd://close#top"), Some(WelcomeCommand::Close));
    }

    #[test]
    fn link_keeps_query_verbatim() {
        assert_eq!(
            WelcomeCommand::parse("cmd://link?https://forum.antergos.com/?a=1&b=2"),
            Some(WelcomeCommand::Link("https://forum.antergos.com/?a=1&b=2".to_string()))
        );
    }

    #[test]
    fn fragment_inside_link_is_cut() {
        assert_eq!(
            WelcomeCommand::parse("cmd://link?https://antergos.com/wiki#install"),
            Some(WelcomeCommand::Link("https://antergos.com/wiki".to_string()))
        );
    }

    #[test]
    fn unknown_names_are_kept() {
        assert_eq!(
            WelcomeCommand::parse("cmd://install"),
            Some(WelcomeCommand::Unknown("install".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let cmd = WelcomeCommand::Link("https://antergos.com".to_string());
        assert_eq!(cmd.to_string(), "cmd://link?https://antergos.com");
        assert_eq!(WelcomeCommand::parse(&cmd.to_string()), Some(cmd));
    }
}
