//! Non-interactive UI for pipes and CI.

use std::collections::HashMap;

use crate::error::Result;

use super::{parse_answer, OutputMode, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer confirmations.
///
/// `FTC_HELPER_CONFIRM_REUSE_DIR=yes` answers the `reuse_dir` question.
pub const CONFIRM_ENV_PREFIX: &str = "FTC_HELPER_CONFIRM_";

/// UI implementation for non-interactive mode.
///
/// Status goes to stdout without styling. Confirmations are answered from
/// the environment, falling back to the question's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    answers: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI, reading answers from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let answers = std::env::vars()
            .filter(|(k, _)| k.starts_with(CONFIRM_ENV_PREFIX))
            .collect();
        Self { mode, answers }
    }

    /// Create with explicit answers (for testing).
    pub fn with_answers(mode: OutputMode, answers: HashMap<String, String>) -> Self {
        Self { mode, answers }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn confirm(&mut self, key: &str, question: &str, default: bool) -> Result<bool> {
        let env_key = format!("{}{}", CONFIRM_ENV_PREFIX, key.to_uppercase());
        let answer = self
            .answers
            .get(&env_key)
            .and_then(|value| parse_answer(value))
            .unwrap_or(default);
        tracing::debug!("{} -> {} (non-interactive)", question, answer);
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", title);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints only its final status.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
