//! Configuration file schema.
//!
//! Maps `~/.ftc-helper.yaml`. Every key is optional; unknown keys are
//! ignored so older helpers can read newer files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root structure of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Directory holding FTC projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<PathBuf>,

    /// Android Studio launcher to use instead of searching install locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_studio_path: Option<PathBuf>,

    /// Release listing API for the FTC starter app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub releases_url: Option<String>,

    /// Repository the tagged starter-app archives are downloaded from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robot_controller_repo: Option<String>,
}
