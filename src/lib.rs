//! ftc-helper - Manage FTC robot projects and the tools around them.
//!
//! ftc-helper creates robot projects from tagged FTC releases, opens them in
//! Android Studio, syncs their TeamCode directory with git, reports
//! installed tool versions, and downloads the current installers for the
//! tools a team needs.
//!
//! # Modules
//!
//! - [`archive`] - Zip extraction for release archives
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and precedence resolution
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - HTTP retrieval of pages, JSON and downloads
//! - [`installer`] - Installer link discovery and ranking
//! - [`process`] - Subprocess execution
//! - [`project`] - Project layout under the work directory
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`version`] - Version extraction from descriptors and banners
//!
//! # Example
//!
//! ```
//! use ftc_helper::installer::{locate_installer, Platform};
//!
//! let page = r#"
//!     <a href="https://dl.example.com/Studio-2.0.dmg">Mac</a>
//!     <a href="https://dl.example.com/Studio-2.0-setup.exe">Windows</a>
//! "#;
//! let installer = locate_installer(page, Platform::Windows).unwrap();
//! assert_eq!(installer.filename.as_deref(), Some("Studio-2.0-setup.exe"));
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod installer;
pub mod process;
pub mod project;
pub mod ui;
pub mod version;

pub use error::{FtcError, Result};
