//! Command implementations.

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod display;
pub mod download;
pub mod init;
pub mod launch;
pub mod list;
pub mod projects;
pub mod pull;
pub mod push;
pub mod tools;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
