//! Configuration loading and resolution.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Precedence resolution in [`settings`]
//!
//! # Example
//!
//! ```
//! use ftc_helper::config::{parse_config, HelperConfig};
//! use std::path::{Path, PathBuf};
//!
//! let config = parse_config("work_dir: /srv/robots", Path::new("inline.yaml")).unwrap();
//! assert_eq!(config.work_dir, Some(PathBuf::from("/srv/robots")));
//! ```
//!
//! # Precedence
//!
//! 1. Command-line flags (`--work-dir`)
//! 2. Environment (`FTC_HELPER_WORK_DIR`, `ANDROID_STUDIO_PATH`)
//! 3. Config file (`~/.ftc-helper.yaml` or `--config <path>`)
//! 4. Built-in defaults

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{
    default_config_path, discover_config, load_config_file, load_settings, parse_config,
    CONFIG_FILE_NAME,
};
pub use schema::HelperConfig;
pub use settings::{
    Settings, SettingsOverrides, ANDROID_STUDIO_PATH_ENV, DEFAULT_RELEASES_URL,
    DEFAULT_ROBOT_CONTROLLER_REPO, WORK_DIR_ENV,
};
