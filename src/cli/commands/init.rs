//! Init command implementation.
//!
//! The `ftc-helper init` command creates a project from a tagged FTC
//! starter-app release and prepares its TeamCode directory for git.

use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::extract_zip;
use crate::cli::args::InitArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::fetch::HttpFetcher;
use crate::process::run_checked;
use crate::project::{
    archive_url, extracted_dir_name, flatten_extracted, normalize_remote_url, project_path,
    team_code_path,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::with_spinner;

/// The init command implementation.
pub struct InitCommand {
    work_dir: PathBuf,
    repo: String,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(settings: &Settings, args: InitArgs) -> Self {
        Self {
            work_dir: settings.work_dir.clone(),
            repo: settings.robot_controller_repo.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InitArgs {
        &self.args
    }

    fn download_and_extract(&self, ui: &mut dyn UserInterface, root: &Path) -> Result<usize> {
        let url = archive_url(&self.repo, &self.args.version);
        ui.message(&format!("Downloading {} to {}...", url, root.display()));

        let fetcher = HttpFetcher::new()?;
        let scratch = tempfile::tempdir()?;
        let archive = scratch.path().join("release.zip");

        with_spinner(ui, "Downloading starter code...", "Downloaded starter code", || {
            fetcher.download_to(&url, &archive)
        })?;
        with_spinner(ui, "Extracting files...", "Extracted files", || {
            extract_zip(&archive, root)
        })
    }

    /// Initialize git in the TeamCode directory. Failures are reported, not fatal.
    fn setup_git(&self, ui: &mut dyn UserInterface, team_code: &Path) {
        ui.message("Initializing git repository...");
        match run_checked("git", &["init"], Some(team_code)) {
            Ok(output) => {
                if ui.output_mode().shows_command_output() {
                    ui.message(output.stdout.trim_end());
                }
            }
            Err(e) => {
                ui.warning(&format!("Error initializing git repo: {}", e));
                return;
            }
        }

        if let Some(git_url) = &self.args.git {
            let remote = normalize_remote_url(git_url);
            ui.message(&format!("Setting up remote to {}...", remote));
            if let Err(e) = run_checked("git", &["remote", "add", "origin", &remote], Some(team_code))
            {
                ui.warning(&format!("Error adding git remote: {}", e));
            }
        }
    }
}

fn has_entries(dir: &Path) -> Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }
    Ok(fs::read_dir(dir)?.next().is_some())
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = project_path(&self.work_dir, &self.args.project);

        if has_entries(&root)? {
            let question = format!(
                "{} already exists and is not empty. Extract into it anyway?",
                root.display()
            );
            if !ui.confirm("reuse_dir", &question, false)? {
                ui.warning("Init cancelled; existing directory left untouched");
                return Ok(CommandResult::failure(1));
            }
        }

        let files = self.download_and_extract(ui, &root)?;
        tracing::debug!("Extracted {} files into {}", files, root.display());

        if !flatten_extracted(&root, &self.args.version)? {
            ui.warning(&format!(
                "Archive had no {} directory; layout left as extracted",
                extracted_dir_name(&self.args.version)
            ));
        }

        let team_code = team_code_path(&root);
        if team_code.is_dir() {
            self.setup_git(ui, &team_code);
        } else {
            ui.warning("No TeamCode directory in this release; skipping git setup");
        }

        ui.success(&format!(
            "Project '{}' is ready at {}",
            self.args.project,
            root.display()
        ));
        Ok(CommandResult::success())
    }
}
