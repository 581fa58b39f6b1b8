//! Tools command implementation.
//!
//! The `ftc-helper tools` command reports the installed Android Studio and
//! git versions. A tool that cannot be detected is reported, not fatal.

use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::version::{detect_android_studio_version, detect_git_version};

use super::dispatcher::{Command, CommandResult};

/// The tools command implementation.
pub struct ToolsCommand {
    settings: Settings,
}

impl ToolsCommand {
    /// Create a new tools command.
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }
}

fn report(ui: &mut dyn UserInterface, tool: &str, detected: Result<String>) {
    match detected {
        Ok(version) => ui.success(&format!("{}: {}", tool, version)),
        Err(e) => {
            tracing::debug!("{} detection failed: {}", tool, e);
            ui.warning(&format!("{}: not detected ({})", tool, e));
        }
    }
}

impl Command for ToolsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Installed tools");
        report(
            ui,
            "Android Studio",
            detect_android_studio_version(&self.settings),
        );
        report(ui, "git", detect_git_version());
        Ok(CommandResult::success())
    }
}
