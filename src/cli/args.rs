//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::installer::Platform;

/// ftc-helper - Manage local FTC robot projects and tooling.
#[derive(Debug, Parser)]
#[command(name = "ftc-helper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    /// Path to config file (default is ~/.ftc-helper.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding FTC projects
    #[arg(short, long, global = true, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available FTC releases
    List,

    /// Create a new project from a tagged FTC release
    Init(InitArgs),

    /// Open a project in Android Studio
    Launch(ProjectArgs),

    /// Pull code into a project's TeamCode directory
    Pull(ProjectArgs),

    /// Commit and push a project's TeamCode directory
    Push(PushArgs),

    /// List local projects
    Projects,

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Show installed Android Studio and git versions
    Tools,

    /// Show this helper's version
    Version,

    /// Download the latest Android Studio installer for this OS
    DownloadStudio(DownloadArgs),

    /// Download the latest Bambu Studio installer for this OS
    DownloadBambu(DownloadArgs),

    /// Download the REV Hardware Client installer
    DownloadRev(DownloadArgs),

    /// Download the latest Git for Windows installer (64-bit)
    DownloadGit(DownloadArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InitArgs {
    /// Release tag to start from (e.g. v10.1)
    #[arg(id = "release_version", value_name = "VERSION")]
    pub version: String,

    /// Name of the new project directory
    #[arg(short, long)]
    pub project: String,

    /// Git repository URL to set up as remote
    #[arg(short, long, value_name = "URL")]
    pub git: Option<String>,
}

/// Arguments for commands acting on one project.
#[derive(Debug, Clone, clap::Args)]
pub struct ProjectArgs {
    /// Project directory name under the work dir
    pub project: String,
}

/// Arguments for the `push` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PushArgs {
    /// Project directory name under the work dir
    pub project: String,

    /// Commit message
    pub message: String,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `download-*` commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DownloadArgs {
    /// Output path for the downloaded installer
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Target platform instead of this machine's
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Read the download page from this URL instead of the vendor's
    #[arg(long, value_name = "URL", hide = true)]
    pub from: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
