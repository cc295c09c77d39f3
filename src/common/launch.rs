//! Spawning helper programs

use anyhow::{Context, Result, bail};
use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

/// Browsers tried when no browser is configured and xdg-open is missing
const FALLBACK_BROWSERS: &[&str] = &["xdg-open", "firefox", "chromium"];

/// Starts external programs on behalf of the welcome screen
pub trait Launcher {
    /// Start `program` detached from the welcome process
    fn spawn(&self, program: &str, args: &[&str]) -> Result<()>;

    /// Open `url` in the user's web browser
    fn open_url(&self, url: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct SystemLauncher {
    browser: Option<String>,
}

impl SystemLauncher {
    pub fn new(browser: Option<String>) -> Self {
        Self { browser }
    }

    fn browsers(&self) -> Vec<&str> {
        match &self.browser {
            Some(browser) => vec![browser.as_str()],
            None => FALLBACK_BROWSERS.to_vec(),
        }
    }
}

/// Check if a program can be found on $PATH
pub fn is_available(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Wait for `child` on a detached thread so it does not linger as a zombie
fn reap(mut child: Child) -> JoinHandle<io::Result<ExitStatus>> {
    thread::spawn(move || child.wait())
}

impl Launcher for SystemLauncher {
    fn spawn(&self, program: &str, args: &[&str]) -> Result<()> {
        if !is_available(program) {
            bail!("{} is not installed", program);
        }

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to start {}", program))?;
        reap(child);
        Ok(())
    }

    fn open_url(&self, url: &str) -> Result<()> {
        let mut last_error = None;
        for browser in self.browsers() {
            match self.spawn(browser, &[url]) {
                Ok(()) => return Ok(()),
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error
            .unwrap_or_else(|| anyhow::anyhow!("No browser configured"))
            .context(format!("Failed to open {}", url)))
    }
}

#[cfg(test)]
pub mod testing {
    use super::Launcher;
    use anyhow::{Result, bail};
    use std::cell::RefCell;

    /// Records launches instead of running anything
    #[derive(Debug, Default)]
    pub struct RecordingLauncher {
        pub spawned: RefCell<Vec<(String, Vec<String>)>>,
        pub opened: RefCell<Vec<String>>,
        pub fail: bool,
    }

    impl RecordingLauncher {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    impl Launcher for RecordingLauncher {
        fn spawn(&self, program: &str, args: &[&str]) -> Result<()> {
            if self.fail {
                bail!("{} is not installed", program);
            }
            self.spawned.borrow_mut().push((
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            ));
            Ok(())
        }

        fn open_url(&self, url: &str) -> Result<()> {
            if self.fail {
                bail!("no browser");
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }
}
