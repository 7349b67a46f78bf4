use crate::domain::ports::NavigationHost;
use crate::utils::error::{LocatorError, Result};
use std::process::Command;

/// Opens URLs through the host OS opener. A terminal has no browsing context
/// to replace, so "new context" and "redirect" both spawn the opener; hosts
/// that can actually replace a context (a webview) supply their own
/// `NavigationHost`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNavigator;

impl SystemNavigator {
    fn spawn_opener(&self, url: &str) -> Result<()> {
        let mut command = match std::env::consts::OS {
            "macos" => {
                let mut c = Command::new("open");
                c.arg(url);
                c
            }
            "windows" => {
                let mut c = Command::new("cmd");
                c.args(["/C", "start", "", url]);
                c
            }
            _ => {
                let mut c = Command::new("xdg-open");
                c.arg(url);
                c
            }
        };

        command.spawn().map_err(|e| LocatorError::NavigationError {
            message: format!("opener failed for {}: {}", url, e),
        })?;
        Ok(())
    }
}

impl NavigationHost for SystemNavigator {
    fn open_new_context(&self, url: &str) -> Result<()> {
        self.spawn_opener(url)
    }

    fn redirect(&self, url: &str) -> Result<()> {
        self.spawn_opener(url)
    }

    fn platform(&self) -> String {
        std::env::consts::OS.to_string()
    }
}
