//! Shared display helpers for commands.

use crate::error::Result;
use crate::ui::UserInterface;

/// Run `work` behind a spinner, finishing it with `done` or the error.
pub fn with_spinner<T, F>(ui: &mut dyn UserInterface, message: &str, done: &str, work: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let mut spinner = ui.start_spinner(message);
    match work() {
        Ok(value) => {
            spinner.finish_success(done);
            Ok(value)
        }
        Err(e) => {
            spinner.finish_error(&format!("{} failed", message.trim_end_matches("...")));
            Err(e)
        }
    }
}

/// Print a bulleted list, or `empty` when there is nothing to list.
pub fn show_list<I, S>(ui: &mut dyn UserInterface, items: I, empty: &str)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut shown = false;
    for item in items {
        ui.message(&format!("- {}", item.as_ref()));
        shown = true;
    }
    if !shown {
        ui.message(empty);
    }
}
