//! Push command implementation.
//!
//! The `ftc-helper push` command stages, commits and pushes a project's
//! TeamCode directory, stopping at the first git step that fails.

use std::path::PathBuf;

use crate::cli::args::PushArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::process::{run_checked, run_inherited};
use crate::project::resolve_team_code;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The push command implementation.
pub struct PushCommand {
    work_dir: PathBuf,
    args: PushArgs,
}

impl PushCommand {
    /// Create a new push command.
    pub fn new(settings: &Settings, args: PushArgs) -> Self {
        Self {
            work_dir: settings.work_dir.clone(),
            args,
        }
    }
}

impl Command for PushCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let team_code = resolve_team_code(&self.work_dir, &self.args.project)?;

        ui.message("Staging changes...");
        run_checked("git", &["add", "."], Some(&team_code))?;

        ui.message("Committing changes...");
        run_checked("git", &["commit", "-m", &self.args.message], Some(&team_code))?;

        ui.message("Pushing to remote...");
        run_inherited("git", &["push"], Some(&team_code))?;

        ui.success(&format!("Pushed '{}'", self.args.project));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, FtcError};
    use crate::process::run_process;
    use crate::project::team_code_path;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn git_available() -> bool {
        run_process("git", &["--version"], None).is_ok()
    }

    fn push_args(project: &str) -> PushArgs {
        PushArgs {
            project: project.to_string(),
            message: "Tune drive PID".to_string(),
        }
    }

    #[test]
    fn missing_project_is_not_found() {
        let temp = TempDir::new().unwrap();
        let cmd = PushCommand::new(&Settings::with_work_dir(temp.path()), push_args("ghost"));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProjectNotFound);
    }

    #[test]
    fn stops_at_push_without_remote() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let team_code = team_code_path(&temp.path().join("robot"));
        fs::create_dir_all(&team_code).unwrap();
        for args in [
            vec!["init"],
            vec!["config", "user.email", "team@example.com"],
            vec!["config", "user.name", "Team"],
            vec!["config", "commit.gpgsign", "false"],
        ] {
            run_checked("git", &args, Some(&team_code)).unwrap();
        }
        fs::write(team_code.join("Auto.java"), "class Auto {}").unwrap();

        let cmd = PushCommand::new(&Settings::with_work_dir(temp.path()), push_args("robot"));
        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();

        match err {
            FtcError::CommandFailed { command, .. } => assert_eq!(command, "git push"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            ui.messages(),
            &["Staging changes...", "Committing changes...", "Pushing to remote..."]
        );

        let log = run_checked("git", &["log", "--format=%s"], Some(&team_code)).unwrap();
        assert_eq!(log.stdout.trim(), "Tune drive PID");
    }

    #[test]
    fn stops_at_commit_when_nothing_changed() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let team_code = team_code_path(&temp.path().join("robot"));
        fs::create_dir_all(&team_code).unwrap();
        run_checked("git", &["init"], Some(&team_code)).unwrap();

        let cmd = PushCommand::new(&Settings::with_work_dir(temp.path()), push_args("robot"));
        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::CommandFailed);
        assert!(!ui.has_message("Pushing to remote..."));
    }
}
