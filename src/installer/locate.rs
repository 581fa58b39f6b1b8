//! Installer link extraction and ranking.
//!
//! Links are scraped with a regular expression restricted to known installer
//! extensions; this is a best-effort adapter and expected to need updates
//! when download pages change. Callers only depend on [`locate_installer`].

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{FtcError, Result};

use super::platform::Platform;

/// An absolute http(s) URL ending in an installer extension, in any case.
static INSTALLER_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[A-Za-z0-9_./%?=&:-]+\.(?i:exe|msi|dmg|pkg|appimage|deb|tar\.gz|zip)\b")
        .unwrap()
});

/// The chosen installer download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallerResult {
    /// Direct download URL.
    pub url: String,
    /// Filename taken from the URL path, if it has one.
    pub filename: Option<String>,
}

impl InstallerResult {
    /// Build a result, deriving the filename from `url`.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let filename = derive_filename(&url);
        Self { url, filename }
    }
}

/// Last non-empty segment of the URL's path.
///
/// Query strings and fragments are ignored, so the server-provided name is
/// kept exactly as it appears in the path.
pub fn derive_filename(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
}

/// All installer-looking links in `content`, in document order.
///
/// Duplicates are kept.
pub fn extract_candidates(content: &str) -> Vec<&str> {
    INSTALLER_LINK
        .find_iter(content)
        .map(|m| m.as_str())
        .collect()
}

/// Pick the best candidate for `platform`.
///
/// The first candidate satisfying the platform rule wins; if none does, the
/// first candidate overall is returned. `None` only when `candidates` is empty.
pub fn rank<'a>(candidates: &[&'a str], platform: Platform) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|c| platform.matches(c))
        .or_else(|| candidates.first().copied())
}

/// Extract and rank installer links from page content.
///
/// # Errors
///
/// Returns `NoCandidates` if the content contains no installer links.
pub fn locate_installer(page_content: &str, platform: Platform) -> Result<InstallerResult> {
    locate_filtered(page_content, platform, "page content", |_| true)
}

/// Like [`locate_installer`], considering only candidates accepted by `keep`.
pub(crate) fn locate_filtered<F>(
    page_content: &str,
    platform: Platform,
    origin: &str,
    keep: F,
) -> Result<InstallerResult>
where
    F: Fn(&str) -> bool,
{
    let candidates: Vec<&str> = extract_candidates(page_content)
        .into_iter()
        .filter(|c| keep(c))
        .collect();
    tracing::debug!(
        "Found {} installer candidates in {}",
        candidates.len(),
        origin
    );

    let chosen = rank(&candidates, platform).ok_or_else(|| FtcError::NoCandidates {
        origin: origin.to_string(),
    })?;

    if !platform.matches(chosen) {
        tracing::debug!("No {} candidate; falling back to {}", platform, chosen);
    }

    Ok(InstallerResult::new(chosen))
}
