//! Resolved runtime settings.
//!
//! [`Settings`] is computed once at startup from the config file, the
//! environment and command-line flags, then passed explicitly to each
//! command.

use std::env::VarError;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::schema::HelperConfig;

/// FTC starter-app release listing.
pub const DEFAULT_RELEASES_URL: &str =
    "https://api.github.com/repos/FIRST-Tech-Challenge/FtcRobotController/releases";

/// FTC starter-app repository; tagged archives live under it.
pub const DEFAULT_ROBOT_CONTROLLER_REPO: &str =
    "https://github.com/FIRST-Tech-Challenge/FtcRobotController";

/// Work dir name under the home directory when nothing else is configured.
pub const DEFAULT_WORK_DIR_NAME: &str = "StudioProjects";

/// Environment variable overriding the work dir.
pub const WORK_DIR_ENV: &str = "FTC_HELPER_WORK_DIR";

/// Environment variable pointing at the Android Studio launcher.
pub const ANDROID_STUDIO_PATH_ENV: &str = "ANDROID_STUDIO_PATH";

/// Values supplied on the command line; these win over everything else.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub work_dir: Option<PathBuf>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Directory holding FTC projects.
    pub work_dir: PathBuf,
    /// Explicit Android Studio launcher, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_studio_path: Option<PathBuf>,
    /// Release listing API.
    pub releases_url: String,
    /// Repository for starter-app archives.
    pub robot_controller_repo: String,
    /// Config file the settings were read from.
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings with precedence flag > environment > file > default.
    pub fn resolve<F>(
        config: &HelperConfig,
        config_file: Option<PathBuf>,
        overrides: &SettingsOverrides,
        env_fn: &F,
        home: Option<PathBuf>,
    ) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let env_path = |key: &str| {
            env_fn(key)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        let work_dir = overrides
            .work_dir
            .clone()
            .or_else(|| env_path(WORK_DIR_ENV))
            .or_else(|| config.work_dir.clone())
            .unwrap_or_else(|| default_work_dir(home.as_deref()));

        let android_studio_path = env_path(ANDROID_STUDIO_PATH_ENV)
            .or_else(|| config.android_studio_path.clone());

        Self {
            work_dir,
            android_studio_path,
            releases_url: config
                .releases_url
                .clone()
                .unwrap_or_else(|| DEFAULT_RELEASES_URL.to_string()),
            robot_controller_repo: config
                .robot_controller_repo
                .clone()
                .unwrap_or_else(|| DEFAULT_ROBOT_CONTROLLER_REPO.to_string()),
            config_file,
        }
    }

    /// Settings built purely from defaults, rooted at `work_dir`.
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            android_studio_path: None,
            releases_url: DEFAULT_RELEASES_URL.to_string(),
            robot_controller_repo: DEFAULT_ROBOT_CONTROLLER_REPO.to_string(),
            config_file: None,
        }
    }
}

fn default_work_dir(home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) => home.join(DEFAULT_WORK_DIR_NAME),
        None => PathBuf::from(DEFAULT_WORK_DIR_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    fn home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/team"))
    }

    #[test]
    fn defaults_when_nothing_configured() {
        let settings = Settings::resolve(
            &HelperConfig::default(),
            None,
            &SettingsOverrides::default(),
            &env_from(&[]),
            home(),
        );
        assert_eq!(settings.work_dir, PathBuf::from("/home/team/StudioProjects"));
        assert_eq!(settings.releases_url, DEFAULT_RELEASES_URL);
        assert_eq!(settings.robot_controller_repo, DEFAULT_ROBOT_CONTROLLER_REPO);
        assert!(settings.android_studio_path.is_none());
    }

    #[test]
    fn file_beats_default() {
        let config = HelperConfig {
            work_dir: Some(PathBuf::from("/srv/robots")),
            releases_url: Some("http://mirror/releases".to_string()),
            ..Default::default()
        };
        let settings = Settings::resolve(
            &config,
            None,
            &SettingsOverrides::default(),
            &env_from(&[]),
            home(),
        );
        assert_eq!(settings.work_dir, PathBuf::from("/srv/robots"));
        assert_eq!(settings.releases_url, "http://mirror/releases");
    }

    #[test]
    fn env_beats_file() {
        let config = HelperConfig {
            work_dir: Some(PathBuf::from("/srv/robots")),
            android_studio_path: Some(PathBuf::from("/from/file")),
            ..Default::default()
        };
        let env = env_from(&[
            (WORK_DIR_ENV, "/env/robots"),
            (ANDROID_STUDIO_PATH_ENV, "/from/env"),
        ]);
        let settings =
            Settings::resolve(&config, None, &SettingsOverrides::default(), &env, home());
        assert_eq!(settings.work_dir, PathBuf::from("/env/robots"));
        assert_eq!(settings.android_studio_path, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn flag_beats_env() {
        let overrides = SettingsOverrides {
            work_dir: Some(PathBuf::from("/flag/robots")),
        };
        let env = env_from(&[(WORK_DIR_ENV, "/env/robots")]);
        let settings =
            Settings::resolve(&HelperConfig::default(), None, &overrides, &env, home());
        assert_eq!(settings.work_dir, PathBuf::from("/flag/robots"));
    }

    #[test]
    fn blank_env_is_ignored() {
        let env = env_from(&[(WORK_DIR_ENV, "  ")]);
        let settings = Settings::resolve(
            &HelperConfig::default(),
            None,
            &SettingsOverrides::default(),
            &env,
            home(),
        );
        assert_eq!(settings.work_dir, PathBuf::from("/home/team/StudioProjects"));
    }

    #[test]
    fn no_home_uses_relative_default() {
        let settings = Settings::resolve(
            &HelperConfig::default(),
            None,
            &SettingsOverrides::default(),
            &env_from(&[]),
            None,
        );
        assert_eq!(settings.work_dir, PathBuf::from("StudioProjects"));
    }

    #[test]
    fn serializes_without_config_file() {
        let mut settings = Settings::with_work_dir("/robots");
        settings.config_file = Some(PathBuf::from("/home/team/.ftc-helper.yaml"));
        let yaml = serde_yaml::to_string(&settings).unwrap();
        assert!(yaml.contains("work_dir: /robots"));
        assert!(!yaml.contains("config_file"));
        assert!(!yaml.contains("android_studio_path"));
    }
}
