//! Version command implementation.

use crate::error::Result;
use crate::ui::UserInterface;
use crate::version::detect_self_version;

use super::dispatcher::{Command, CommandResult};

/// The version command implementation.
pub struct VersionCommand;

impl VersionCommand {
    /// Create a new version command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for VersionCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cwd = std::env::current_dir()?;
        ui.message(&detect_self_version(&cwd));
        Ok(CommandResult::success())
    }
}
