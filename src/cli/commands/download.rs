//! Download command implementation.
//!
//! The `ftc-helper download-*` commands find the current installer for a
//! known product and save it locally.

use std::path::PathBuf;

use crate::cli::args::DownloadArgs;
use crate::error::{FtcError, Result};
use crate::fetch::HttpFetcher;
use crate::installer::{InstallerResult, Platform, Provider};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::with_spinner;

/// The download command implementation.
pub struct DownloadCommand {
    provider: Provider,
    args: DownloadArgs,
}

impl DownloadCommand {
    /// Create a new download command for `provider`.
    pub fn new(provider: Provider, args: DownloadArgs) -> Self {
        Self { provider, args }
    }

    fn output_path(&self, installer: &InstallerResult) -> Result<PathBuf> {
        if let Some(out) = &self.args.out {
            return Ok(out.clone());
        }
        installer
            .filename
            .as_ref()
            .map(PathBuf::from)
            .ok_or_else(|| {
                FtcError::not_found(format!(
                    "filename in {}; pass --out to choose one",
                    installer.url
                ))
            })
    }
}

impl Command for DownloadCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let host = self.args.platform.or_else(Platform::detect);
        let url = self
            .args
            .from
            .clone()
            .unwrap_or_else(|| self.provider.default_url().to_string());
        let fetcher = HttpFetcher::new()?;

        let installer = with_spinner(
            ui,
            &format!("Looking up {} installer...", self.provider),
            &format!("Found {} installer", self.provider),
            || self.provider.discover(&fetcher, &url, host),
        )?;
        ui.message(&format!("Found: {}", installer.url));

        let dest = self.output_path(&installer)?;
        with_spinner(
            ui,
            &format!("Downloading {}...", dest.display()),
            "Download finished",
            || fetcher.download_to(&installer.url, &dest),
        )?;

        ui.success(&format!("Download complete: {}", dest.display()));
        Ok(CommandResult::success())
    }
}
