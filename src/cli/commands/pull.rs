//! Pull command implementation.
//!
//! The `ftc-helper pull` command runs `git pull` in a project's TeamCode
//! directory with output passed through to the terminal.

use std::path::PathBuf;

use crate::cli::args::ProjectArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::process::run_inherited;
use crate::project::resolve_team_code;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The pull command implementation.
pub struct PullCommand {
    work_dir: PathBuf,
    args: ProjectArgs,
}

impl PullCommand {
    /// Create a new pull command.
    pub fn new(settings: &Settings, args: ProjectArgs) -> Self {
        Self {
            work_dir: settings.work_dir.clone(),
            args,
        }
    }
}

impl Command for PullCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let team_code = resolve_team_code(&self.work_dir, &self.args.project)?;

        ui.message(&format!("Pulling code for project '{}'...", self.args.project));
        run_inherited("git", &["pull"], Some(&team_code))?;

        ui.success("Pull complete");
        Ok(CommandResult::success())
    }
}
