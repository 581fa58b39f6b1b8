//! Projects command implementation.
//!
//! The `ftc-helper projects` command lists local projects under the work dir.

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;
use crate::project::list_projects;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_list;

/// The projects command implementation.
pub struct ProjectsCommand {
    work_dir: PathBuf,
}

impl ProjectsCommand {
    /// Create a new projects command.
    pub fn new(settings: &Settings) -> Self {
        Self {
            work_dir: settings.work_dir.clone(),
        }
    }
}

impl Command for ProjectsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!("Active projects in: {}", self.work_dir.display()));
        let projects = list_projects(&self.work_dir)?;
        show_list(ui, &projects, "No active projects found.");
        Ok(CommandResult::success())
    }
}
