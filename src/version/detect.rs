//! Version detection for installed tools.
//!
//! Each detector gathers raw text from the system (a descriptor file, a
//! subprocess banner) and hands it to the matching extractor. Descriptor
//! lookups fall back to a plain `build.txt`; banner parsing has no fallback.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{FtcError, Result};
use crate::process::run_process;

use super::{extract_version_from_banner, extract_version_from_descriptor};

/// Launcher locations relative to a Windows program-files directory.
const WINDOWS_LAUNCHERS: &[&[&str]] = &[
    &["Android", "Android Studio", "bin", "studio64.exe"],
    &["Android", "Android Studio", "bin", "studio.exe"],
    &["Android", "Android Studio", "bin", "launcher.exe"],
    &["JetBrains", "AndroidStudio", "bin", "studio64.exe"],
    &["JetBrains", "AndroidStudio", "bin", "studio.exe"],
];

/// Descriptor locations relative to the install root, in lookup order.
const DESCRIPTOR_LOCATIONS: &[&[&str]] = &[
    &["product-info.json"],
    &["product-info", "product-info.json"],
    &["lib", "product-info.json"],
    &["Resources", "product-info.json"],
];

/// Plain-text fallback holding the build string.
const BUILD_FILE: &str = "build.txt";

/// Program-files directories to search for a Windows install.
pub fn program_dirs<F>(env_fn: &F) -> Vec<PathBuf>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let mut dirs: Vec<PathBuf> = ["ProgramFiles", "ProgramFiles(x86)"]
        .iter()
        .filter_map(|var| env_fn(var).ok())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .collect();

    for fallback in [r"C:\Program Files", r"C:\Program Files (x86)"] {
        let path = PathBuf::from(fallback);
        if !dirs.contains(&path) {
            dirs.push(path);
        }
    }
    dirs
}

/// Find the Android Studio launcher.
///
/// A configured path wins if it exists; otherwise well-known install
/// locations under each program directory are tried in order.
///
/// # Errors
///
/// Returns `NotFound` if no launcher exists at any candidate location.
pub fn find_android_studio_launcher(
    configured: Option<&Path>,
    program_dirs: &[PathBuf],
) -> Result<PathBuf> {
    if let Some(path) = configured {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        tracing::warn!(
            "Configured Android Studio path {} does not exist",
            path.display()
        );
    }

    for base in program_dirs {
        for parts in WINDOWS_LAUNCHERS {
            let candidate = parts.iter().fold(base.clone(), |acc, p| acc.join(p));
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(FtcError::not_found(
        "Android Studio executable. Set ANDROID_STUDIO_PATH or android_studio_path in config",
    ))
}

/// Locate Android Studio using the resolved settings and the process environment.
pub fn locate_android_studio(settings: &Settings) -> Result<PathBuf> {
    let dirs = program_dirs(&|key: &str| std::env::var(key));
    find_android_studio_launcher(settings.android_studio_path.as_deref(), &dirs)
}

/// The install root sits two levels above the launcher (`<root>/bin/<exe>`).
pub fn install_root(launcher: &Path) -> Option<PathBuf> {
    launcher.parent()?.parent().map(Path::to_path_buf)
}

/// Read the version of an Android Studio install rooted at `root`.
///
/// # Errors
///
/// Returns `NotFound` if neither a usable descriptor nor a non-empty
/// `build.txt` exists.
pub fn read_install_version(root: &Path) -> Result<String> {
    for parts in DESCRIPTOR_LOCATIONS {
        let path = parts.iter().fold(root.to_path_buf(), |acc, p| acc.join(p));
        if !path.is_file() {
            continue;
        }
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!("Skipping unreadable {}: {}", path.display(), e);
                continue;
            }
        };
        match extract_version_from_descriptor(&content) {
            Ok(version) => return Ok(version),
            Err(e) => tracing::debug!("Skipping {}: {}", path.display(), e),
        }
    }

    let fallback = root.join(BUILD_FILE);
    if let Ok(content) = std::fs::read_to_string(&fallback) {
        let trimmed = content.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    Err(FtcError::not_found(format!(
        "Android Studio version under {}",
        root.display()
    )))
}

/// Detect the installed Android Studio version.
pub fn detect_android_studio_version(settings: &Settings) -> Result<String> {
    let launcher = locate_android_studio(settings)?;
    let root = install_root(&launcher).ok_or_else(|| {
        FtcError::not_found(format!("install root for {}", launcher.display()))
    })?;
    tracing::debug!("Android Studio install root: {}", root.display());
    read_install_version(&root)
}

/// Detect the installed git version from `git --version`.
pub fn detect_git_version() -> Result<String> {
    let output = run_process("git", &["--version"], None)?;
    if !output.success {
        return Err(FtcError::CommandFailed {
            command: "git --version".to_string(),
            code: output.exit_code,
        });
    }
    extract_version_from_banner(&output.stdout)
}

/// Version stamped in at build time, if any.
pub fn build_version() -> Option<&'static str> {
    option_env!("FTC_HELPER_BUILD_VERSION").filter(|v| !v.trim().is_empty())
}

/// Non-empty trimmed contents of `<root>/VERSION`.
pub fn version_file_at(root: &Path) -> Option<String> {
    let content = std::fs::read_to_string(root.join("VERSION")).ok()?;
    let trimmed = content.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn git_line(args: &[&str], cwd: &Path) -> Option<String> {
    let output = run_process("git", args, Some(cwd)).ok()?;
    let line = output.stdout.trim();
    (output.success && !line.is_empty()).then(|| line.to_string())
}

/// Determine this tool's own version.
///
/// Order: build-time stamp, `VERSION` at the enclosing git top level, the
/// latest tag, the short commit hash, then the package version.
pub fn detect_self_version(cwd: &Path) -> String {
    if let Some(v) = build_version() {
        return v.to_string();
    }

    if let Some(root) = git_line(&["rev-parse", "--show-toplevel"], cwd) {
        if let Some(v) = version_file_at(Path::new(&root)) {
            return v;
        }
    }

    git_line(&["describe", "--tags", "--abbrev=0"], cwd)
        .or_else(|| git_line(&["rev-parse", "--short", "HEAD"], cwd))
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
}
