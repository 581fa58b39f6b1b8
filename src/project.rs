//! Local FTC project layout.
//!
//! A project is a directory under the work dir containing the starter
//! app's `TeamCode` module. Source control operations run in the TeamCode
//! package directory, not the project root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FtcError, Result};

/// TeamCode package directory relative to a project root.
pub const TEAM_CODE_SUBPATH: &[&str] = &[
    "TeamCode",
    "src",
    "main",
    "java",
    "org",
    "firstinspires",
    "ftc",
    "teamcode",
];

/// Directory name prefix inside a starter-app release archive.
const ARCHIVE_DIR_PREFIX: &str = "FtcRobotController-";

/// Root directory of the named project.
pub fn project_path(work_dir: &Path, name: &str) -> PathBuf {
    work_dir.join(name)
}

/// TeamCode package directory of a project root.
pub fn team_code_path(project_root: &Path) -> PathBuf {
    TEAM_CODE_SUBPATH
        .iter()
        .fold(project_root.to_path_buf(), |path, part| path.join(part))
}

/// TeamCode directory of the named project, which must exist.
///
/// # Errors
///
/// Returns `ProjectNotFound` if the project or its TeamCode directory is missing.
pub fn resolve_team_code(work_dir: &Path, name: &str) -> Result<PathBuf> {
    let path = team_code_path(&project_path(work_dir, name));
    if path.is_dir() {
        Ok(path)
    } else {
        Err(FtcError::ProjectNotFound {
            name: name.to_string(),
        })
    }
}

/// Names of directories under `work_dir` that contain a TeamCode directory.
///
/// Sorted by name. A missing work dir yields an empty list.
pub fn list_projects(work_dir: &Path) -> Result<Vec<String>> {
    if !work_dir.exists() {
        tracing::debug!("Work dir {} does not exist", work_dir.display());
        return Ok(Vec::new());
    }

    let mut projects = Vec::new();
    for entry in fs::read_dir(work_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if team_code_path(&entry.path()).is_dir() {
            projects.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    projects.sort();
    Ok(projects)
}

/// Download URL of the tagged source archive.
pub fn archive_url(repo_base: &str, version: &str) -> String {
    format!(
        "{}/archive/refs/tags/{}.zip",
        repo_base.trim_end_matches('/'),
        version
    )
}

/// Top-level directory created by extracting the archive for `version`.
///
/// GitHub drops a leading `v` from the tag in archive directory names.
pub fn extracted_dir_name(version: &str) -> String {
    let bare = version.strip_prefix('v').unwrap_or(version);
    format!("{}{}", ARCHIVE_DIR_PREFIX, bare)
}

/// Move the contents of the extracted release directory up into `project_root`.
///
/// Returns `false` without changes if the directory is not present.
pub fn flatten_extracted(project_root: &Path, version: &str) -> Result<bool> {
    let nested = project_root.join(extracted_dir_name(version));
    if !nested.is_dir() {
        tracing::debug!("No {} to flatten", nested.display());
        return Ok(false);
    }

    merge_into(&nested, project_root)?;
    fs::remove_dir_all(&nested)?;
    Ok(true)
}

/// Move every entry of `src` into `dest`.
///
/// Directories already present in `dest` are merged recursively and files
/// are replaced. An entry whose kind differs from the existing one is left
/// in place.
fn merge_into(src: &Path, dest: &Path) -> Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let target = dest.join(entry.file_name());

        if !target.exists() {
            fs::rename(&from, &target)?;
        } else if from.is_dir() && target.is_dir() {
            merge_into(&from, &target)?;
        } else if from.is_file() && target.is_file() {
            fs::rename(&from, &target)?;
        } else {
            tracing::warn!("Skipping {}: already exists", target.display());
        }
    }
    Ok(())
}

/// Prefix a bare host path with `https://`.
///
/// URLs already using `https://` or the `git@` SSH form are left alone.
pub fn normalize_remote_url(url: &str) -> String {
    if url.starts_with("https://") || url.starts_with("git@") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn make_project(work_dir: &Path, name: &str) {
        fs::create_dir_all(team_code_path(&work_dir.join(name))).unwrap();
    }

    #[test]
    fn team_code_path_is_nested_package() {
        let path = team_code_path(Path::new("robot"));
        assert_eq!(
            path,
            Path::new("robot/TeamCode/src/main/java/org/firstinspires/ftc/teamcode")
        );
    }

    #[test]
    fn resolve_team_code_requires_directory() {
        let temp = TempDir::new().unwrap();
        make_project(temp.path(), "alpha");
        fs::create_dir(temp.path().join("bare")).unwrap();

        assert!(resolve_team_code(temp.path(), "alpha").is_ok());
        let err = resolve_team_code(temp.path(), "bare").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProjectNotFound);
        assert!(resolve_team_code(temp.path(), "missing").is_err());
    }

    #[test]
    fn lists_only_projects_with_team_code() {
        let temp = TempDir::new().unwrap();
        make_project(temp.path(), "zeta");
        make_project(temp.path(), "alpha");
        fs::create_dir(temp.path().join("scratch")).unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();

        let projects = list_projects(temp.path()).unwrap();
        assert_eq!(projects, vec!["alpha", "zeta"]);
    }

    #[test]
    fn missing_work_dir_lists_nothing() {
        let temp = TempDir::new().unwrap();
        let projects = list_projects(&temp.path().join("nope")).unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn archive_url_for_tag() {
        assert_eq!(
            archive_url("https://github.com/FIRST-Tech-Challenge/FtcRobotController/", "v10.1"),
            "https://github.com/FIRST-Tech-Challenge/FtcRobotController/archive/refs/tags/v10.1.zip"
        );
    }

    #[test]
    fn extracted_dir_drops_leading_v() {
        assert_eq!(extracted_dir_name("v10.1"), "FtcRobotController-10.1");
        assert_eq!(extracted_dir_name("10.1"), "FtcRobotController-10.1");
        assert_eq!(extracted_dir_name("v8.0-rev"), "FtcRobotController-8.0-rev");
    }

    #[test]
    fn flatten_merges_into_existing_project() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("robot");
        let team_code = team_code_path(&root);
        fs::create_dir_all(&team_code).unwrap();
        fs::write(team_code.join("MyOpMode.java"), "class MyOpMode {}").unwrap();
        fs::write(root.join("build.gradle"), "// old").unwrap();
        fs::write(root.join("README.md"), "ours").unwrap();

        let nested = root.join("FtcRobotController-10.1");
        let nested_team_code = team_code_path(&nested);
        fs::create_dir_all(&nested_team_code).unwrap();
        fs::write(nested_team_code.join("readme.md"), "starter").unwrap();
        fs::write(nested.join("build.gradle"), "// new").unwrap();
        fs::create_dir_all(nested.join("README.md")).unwrap();

        assert!(flatten_extracted(&root, "v10.1").unwrap());
        assert!(!nested.exists());
        assert_eq!(
            fs::read_to_string(team_code.join("MyOpMode.java")).unwrap(),
            "class MyOpMode {}"
        );
        assert!(team_code.join("readme.md").is_file());
        assert_eq!(fs::read_to_string(root.join("build.gradle")).unwrap(), "// new");
        assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "ours");
    }

    #[test]
    fn flatten_moves_contents_up() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("robot");
        let nested = root.join("FtcRobotController-10.1");
        fs::create_dir_all(nested.join("TeamCode")).unwrap();
        fs::write(nested.join("build.gradle"), "// gradle").unwrap();

        assert!(flatten_extracted(&root, "v10.1").unwrap());
        assert!(root.join("TeamCode").is_dir());
        assert!(root.join("build.gradle").is_file());
        assert!(!nested.exists());
    }

    #[test]
    fn flatten_without_nested_dir_is_noop() {
        let temp = TempDir::new().unwrap();
        assert!(!flatten_extracted(temp.path(), "v10.1").unwrap());
    }

    #[test]
    fn remote_url_normalization() {
        assert_eq!(
            normalize_remote_url("github.com/team/robot.git"),
            "https://github.com/team/robot.git"
        );
        assert_eq!(
            normalize_remote_url("https://github.com/team/robot.git"),
            "https://github.com/team/robot.git"
        );
        assert_eq!(
            normalize_remote_url("git@github.com:team/robot.git"),
            "git@github.com:team/robot.git"
        );
    }
}
