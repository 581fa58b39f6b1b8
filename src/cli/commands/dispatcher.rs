//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::installer::Provider;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher with resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the resolved settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = &self.settings;
        match &cli.command {
            Commands::List => super::list::ListCommand::new(settings).execute(ui),
            Commands::Init(args) => {
                super::init::InitCommand::new(settings, args.clone()).execute(ui)
            }
            Commands::Launch(args) => {
                super::launch::LaunchCommand::new(settings, args.clone()).execute(ui)
            }
            Commands::Pull(args) => {
                super::pull::PullCommand::new(settings, args.clone()).execute(ui)
            }
            Commands::Push(args) => {
                super::push::PushCommand::new(settings, args.clone()).execute(ui)
            }
            Commands::Projects => super::projects::ProjectsCommand::new(settings).execute(ui),
            Commands::Config(args) => {
                super::config::ConfigCommand::new(settings, args.clone()).execute(ui)
            }
            Commands::Tools => super::tools::ToolsCommand::new(settings).execute(ui),
            Commands::Version => super::version::VersionCommand::new().execute(ui),
            Commands::DownloadStudio(args) => {
                super::download::DownloadCommand::new(Provider::AndroidStudio, args.clone())
                    .execute(ui)
            }
            Commands::DownloadBambu(args) => {
                super::download::DownloadCommand::new(Provider::BambuStudio, args.clone())
                    .execute(ui)
            }
            Commands::DownloadRev(args) => {
                super::download::DownloadCommand::new(Provider::RevHardwareClient, args.clone())
                    .execute(ui)
            }
            Commands::DownloadGit(args) => {
                super::download::DownloadCommand::new(Provider::GitForWindows, args.clone())
                    .execute(ui)
            }
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}
