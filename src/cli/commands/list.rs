//! List command implementation.
//!
//! The `ftc-helper list` command lists tagged FTC starter-app releases.

use crate::config::Settings;
use crate::error::Result;
use crate::fetch::HttpFetcher;
use crate::installer::Release;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{show_list, with_spinner};

/// The list command implementation.
pub struct ListCommand {
    releases_url: String,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(settings: &Settings) -> Self {
        Self {
            releases_url: settings.releases_url.clone(),
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let fetcher = HttpFetcher::new()?;
        let releases: Vec<Release> =
            with_spinner(ui, "Fetching FTC releases...", "Fetched FTC releases", || {
                fetcher.fetch_json(&self.releases_url)
            })?;

        ui.message("Available FTC releases:");
        show_list(
            ui,
            releases.iter().map(|r| r.tag_name.as_str()),
            "No releases published.",
        );
        Ok(CommandResult::success())
    }
}
