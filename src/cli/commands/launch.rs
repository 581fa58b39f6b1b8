//! Launch command implementation.
//!
//! The `ftc-helper launch` command opens a project in Android Studio and
//! returns without waiting for the IDE.

use std::path::{Path, PathBuf};

use crate::cli::args::ProjectArgs;
use crate::config::Settings;
use crate::error::{FtcError, Result};
use crate::installer::Platform;
use crate::process::spawn_detached;
use crate::project::project_path;
use crate::ui::UserInterface;
use crate::version::locate_android_studio;

use super::dispatcher::{Command, CommandResult};

/// The launch command implementation.
pub struct LaunchCommand {
    settings: Settings,
    args: ProjectArgs,
}

/// Program and arguments that open `project` in Android Studio on `platform`.
pub fn launch_invocation(
    platform: Option<Platform>,
    project: &Path,
    settings: &Settings,
) -> Result<(String, Vec<String>)> {
    let project_arg = project.display().to_string();
    match platform {
        Some(Platform::Mac) => Ok((
            "open".to_string(),
            vec!["-a".to_string(), "Android Studio.app".to_string(), project_arg],
        )),
        Some(Platform::Linux) => Ok(("android-studio".to_string(), vec![project_arg])),
        Some(Platform::Windows) => {
            let launcher = locate_android_studio(settings)?;
            Ok((launcher.display().to_string(), vec![project_arg]))
        }
        None => Err(FtcError::UnsupportedPlatform {
            os: std::env::consts::OS.to_string(),
        }),
    }
}

impl LaunchCommand {
    /// Create a new launch command.
    pub fn new(settings: &Settings, args: ProjectArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }

    fn project_root(&self) -> Result<PathBuf> {
        let root = project_path(&self.settings.work_dir, &self.args.project);
        if root.is_dir() {
            Ok(root)
        } else {
            Err(FtcError::ProjectNotFound {
                name: self.args.project.clone(),
            })
        }
    }
}

impl Command for LaunchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.project_root()?;
        let (program, args) = launch_invocation(Platform::detect(), &root, &self.settings)?;
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        let pid = spawn_detached(&program, &arg_refs, None)?;
        ui.success(&format!(
            "Launched '{}' in Android Studio (pid {})",
            self.args.project, pid
        ));
        Ok(CommandResult::success())
    }
}
