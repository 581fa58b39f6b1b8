//! Subprocess execution.
//!
//! Programs are started directly (no intermediate shell) so arguments such
//! as commit messages are passed through untouched.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{FtcError, Result};

/// Captured result of a finished process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the process exited with code 0.
    pub success: bool,
}

fn build(program: &str, args: &[&str], cwd: Option<&Path>) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    cmd
}

fn spawn_error(program: &str, err: std::io::Error) -> FtcError {
    FtcError::SpawnFailed {
        program: program.to_string(),
        message: err.to_string(),
    }
}

/// Render a command line for messages.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a program to completion, capturing its output.
///
/// A non-zero exit is reported in [`ProcessOutput::success`], not as an error.
///
/// # Errors
///
/// Returns `SpawnFailed` if the program cannot be started.
pub fn run_process(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<ProcessOutput> {
    tracing::debug!("Running {}", display_command(program, args));

    let output = build(program, args, cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(program, e))?;

    Ok(ProcessOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

/// Run a program and treat a non-zero exit as `CommandFailed`.
pub fn run_checked(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<ProcessOutput> {
    let output = run_process(program, args, cwd)?;
    if output.success {
        Ok(output)
    } else {
        Err(FtcError::CommandFailed {
            command: display_command(program, args),
            code: output.exit_code,
        })
    }
}

/// Run a program with stdout/stderr attached to the terminal.
pub fn run_inherited(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
    tracing::debug!("Running {} (inherited output)", display_command(program, args));

    let status = build(program, args, cwd)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| spawn_error(program, e))?;

    if status.success() {
        Ok(())
    } else {
        Err(FtcError::CommandFailed {
            command: display_command(program, args),
            code: status.code(),
        })
    }
}

/// Start a program without waiting for it. Returns the child's pid.
pub fn spawn_detached(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<u32> {
    tracing::debug!("Spawning {}", display_command(program, args));

    let child = build(program, args, cwd)
        .stdin(Stdio::null())
        .spawn()
        .map_err(|e| spawn_error(program, e))?;

    Ok(child.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const MISSING: &str = "ftc-helper-definitely-not-a-real-program";

    #[test]
    fn display_command_joins_args() {
        assert_eq!(
            display_command("git", &["commit", "-m", "msg"]),
            "git commit -m msg"
        );
        assert_eq!(display_command("git", &[]), "git");
    }

    #[test]
    fn missing_program_is_spawn_failed() {
        let err = run_process(MISSING, &["--version"], None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SpawnFailed);
        assert!(err.to_string().contains(MISSING));
    }

    #[test]
    fn spawn_detached_missing_program_fails() {
        let err = spawn_detached(MISSING, &[], None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SpawnFailed);
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout() {
        let output = run_process("sh", &["-c", "echo hello"], None).unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, Some(0));
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn captures_stderr_and_exit_code() {
        let output = run_process("sh", &["-c", "echo oops >&2; exit 3"], None).unwrap();
        assert!(!output.success);
        assert_eq!(output.exit_code, Some(3));
        assert_eq!(output.stderr.trim(), "oops");
    }

    #[cfg(unix)]
    #[test]
    fn respects_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "x").unwrap();
        let output = run_process("ls", &[], Some(temp.path())).unwrap();
        assert!(output.stdout.contains("marker.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn run_checked_reports_exit_code() {
        let err = run_checked("sh", &["-c", "exit 2"], None).unwrap_err();
        match err {
            FtcError::CommandFailed { command, code } => {
                assert_eq!(command, "sh -c exit 2");
                assert_eq!(code, Some(2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn run_inherited_success() {
        assert!(run_inherited("sh", &["-c", "true"], None).is_ok());
    }
}
