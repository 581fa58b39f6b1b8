//! Error types for ftc-helper operations.
//!
//! This module defines [`FtcError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Parsing and ranking failures carry one of the core kinds
//!   ([`ErrorKind::MalformedInput`], [`ErrorKind::NotFound`],
//!   [`ErrorKind::NoCandidates`])
//! - Collaborator failures ([`FtcError::FetchFailed`], [`FtcError::SpawnFailed`])
//!   are passed through unmodified
//! - Use `anyhow::Error` (via `FtcError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ftc-helper operations.
#[derive(Debug, Error)]
pub enum FtcError {
    /// Content was fetched or read but does not parse as the expected format.
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// Content parsed fine but the sought field or pattern is absent.
    #[error("Not found: {what}")]
    NotFound { what: String },

    /// Link extraction produced zero candidates.
    #[error("No installer candidates found in {origin}")]
    NoCandidates { origin: String },

    /// HTTP transport failure or non-success status.
    #[error("Fetching {url} failed{}: {message}", status_suffix(.status))]
    FetchFailed {
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// A subprocess could not be started.
    #[error("Failed to start '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    /// A subprocess ran but exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Named project is missing or has no TeamCode directory.
    #[error("Project not found: {name}")]
    ProjectNotFound { name: String },

    /// Host operating system has no installer platform.
    #[error("Unsupported operating system: {os}")]
    UnsupportedPlatform { os: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|code| format!(" with status {}", code))
        .unwrap_or_default()
}

/// Coarse classification of an [`FtcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    NotFound,
    NoCandidates,
    FetchFailed,
    SpawnFailed,
    CommandFailed,
    Config,
    ProjectNotFound,
    UnsupportedPlatform,
    Io,
    Other,
}

impl FtcError {
    /// Shorthand for [`FtcError::MalformedInput`].
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Shorthand for [`FtcError::NotFound`].
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::NoCandidates { .. } => ErrorKind::NoCandidates,
            Self::FetchFailed { .. } => ErrorKind::FetchFailed,
            Self::SpawnFailed { .. } => ErrorKind::SpawnFailed,
            Self::CommandFailed { .. } => ErrorKind::CommandFailed,
            Self::ConfigNotFound { .. } | Self::ConfigParseError { .. } => ErrorKind::Config,
            Self::ProjectNotFound { .. } => ErrorKind::ProjectNotFound,
            Self::UnsupportedPlatform { .. } => ErrorKind::UnsupportedPlatform,
            Self::Io(_) => ErrorKind::Io,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

/// Result type alias for ftc-helper operations.
pub type Result<T> = std::result::Result<T, FtcError>;
