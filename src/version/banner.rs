//! Version banner parsing.
//!
//! Command-line tools print their version in free-form text such as
//! `git version 2.39.1.windows.1`. The first `MAJOR.MINOR` or
//! `MAJOR.MINOR.PATCH` token is taken verbatim; vendor suffixes after it
//! are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FtcError, Result};

/// Two or three dot-separated ASCII digit groups.
static VERSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+(?:\.[0-9]+)?").unwrap());

/// Extract the first version-like token from a tool's version banner.
///
/// # Errors
///
/// - `MalformedInput` if the banner is empty or whitespace only
/// - `NotFound` if no version token occurs anywhere in the text
pub fn extract_version_from_banner(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FtcError::malformed("empty version banner"));
    }

    VERSION_TOKEN
        .find(trimmed)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| FtcError::not_found(format!("no version number in '{}'", trimmed)))
}
