//! Config command implementation.
//!
//! The `ftc-helper config` command shows resolved configuration.

use crate::cli::args::ConfigArgs;
use crate::config::Settings;
use crate::error::{FtcError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    settings: Settings,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(settings: &Settings, args: ConfigArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(path) = &self.settings.config_file {
            ui.message(&format!("# {}", path.display()));
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&self.settings)
                .map_err(|e| FtcError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml =
                serde_yaml::to_string(&self.settings).map_err(|e| FtcError::Other(e.into()))?;
            ui.message(yaml.trim_end());
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::path::PathBuf;

    #[test]
    fn prints_yaml_by_default() {
        let settings = Settings::with_work_dir("/srv/robots");
        let cmd = ConfigCommand::new(&settings, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("work_dir: /srv/robots"));
        assert!(ui.has_message("releases_url: https://api.github.com/"));
    }

    #[test]
    fn prints_json_when_asked() {
        let settings = Settings::with_work_dir("/srv/robots");
        let cmd = ConfigCommand::new(&settings, ConfigArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["work_dir"], "/srv/robots");
    }

    #[test]
    fn shows_config_file_used() {
        let mut settings = Settings::with_work_dir("/srv/robots");
        settings.config_file = Some(PathBuf::from("/home/team/.ftc-helper.yaml"));
        let cmd = ConfigCommand::new(&settings, ConfigArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages()[0], "# /home/team/.ftc-helper.yaml");
    }
}
