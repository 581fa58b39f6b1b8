//! Zip archive extraction.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{FtcError, Result};

fn zip_error(archive: &Path, err: ZipError) -> FtcError {
    match err {
        ZipError::Io(e) => FtcError::Io(e),
        other => FtcError::malformed(format!("{}: {}", archive.display(), other)),
    }
}

/// Extract every entry of `archive` under `dest`.
///
/// Returns the number of files written (directories are not counted).
///
/// # Errors
///
/// - `MalformedInput` if the file is not a zip archive or an entry name
///   would escape `dest`
/// - `Io` if the archive cannot be read or a file cannot be written
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(file).map_err(|e| zip_error(archive, e))?;
    fs::create_dir_all(dest)?;

    let mut written = 0;
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(|e| zip_error(archive, e))?;
        let relative = entry.enclosed_name().ok_or_else(|| {
            FtcError::malformed(format!(
                "{}: entry '{}' escapes the destination",
                archive.display(),
                entry.name()
            ))
        })?;
        let outpath = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath)?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(&outpath)?);
        io::copy(&mut entry, &mut out)?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
        }

        written += 1;
    }

    tracing::debug!(
        "Extracted {} files from {} into {}",
        written,
        archive.display(),
        dest.display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, entries: &[(&str, Option<&str>)]) {
        let file = File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            match content {
                Some(body) => {
                    zip.start_file(*name, options).unwrap();
                    zip.write_all(body.as_bytes()).unwrap();
                }
                None => zip.add_directory(*name, options).unwrap(),
            }
        }
        zip.finish().unwrap();
    }

    #[test]
    fn extracts_nested_files() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("sdk.zip");
        write_zip(
            &archive,
            &[
                ("FtcRobotController-10.1/", None),
                ("FtcRobotController-10.1/build.gradle", Some("// gradle")),
                ("FtcRobotController-10.1/TeamCode/readme.md", Some("hello")),
            ],
        );

        let dest = temp.path().join("out");
        let count = extract_zip(&archive, &dest).unwrap();

        assert_eq!(count, 2);
        let readme = dest.join("FtcRobotController-10.1/TeamCode/readme.md");
        assert_eq!(fs::read_to_string(readme).unwrap(), "hello");
    }

    #[test]
    fn rejects_path_traversal() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("evil.zip");
        write_zip(&archive, &[("../escaped.txt", Some("nope"))]);

        let dest = temp.path().join("out");
        let err = extract_zip(&archive, &dest).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(!temp.path().join("escaped.txt").exists());
    }

    #[test]
    fn not_a_zip_is_malformed() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("page.zip");
        fs::write(&archive, "<html>rate limited</html>").unwrap();

        let err = extract_zip(&archive, temp.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn missing_archive_is_io() {
        let temp = TempDir::new().unwrap();
        let err = extract_zip(&temp.path().join("absent.zip"), temp.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
