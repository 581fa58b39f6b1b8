//! Installer selection from a release's asset list.
//!
//! Some projects publish installers as GitHub release assets rather than
//! links on a web page. The asset list is already structured, so selection
//! works on asset names instead of scraped URLs.

use serde::Deserialize;

use crate::error::{FtcError, Result};

use super::locate::InstallerResult;
use super::platform::has_extension;

/// Extensions accepted as an installer in an asset list.
const INSTALLER_EXTENSIONS: &[&str] = &["exe", "msi"];

/// Architecture marker preferred when several installers are published.
const PREFERRED_ARCH: &str = "64-bit";

/// A named file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseAsset {
    /// Asset file name as shown on the release page.
    pub name: String,
    /// Direct download URL.
    #[serde(rename = "browser_download_url")]
    pub url: String,
}

impl ReleaseAsset {
    /// Create an asset from a name and URL.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    fn is_installer(&self) -> bool {
        let lower = self.name.to_lowercase();
        INSTALLER_EXTENSIONS
            .iter()
            .any(|ext| has_extension(&lower, ext))
    }

    fn is_preferred_arch(&self) -> bool {
        self.name.to_lowercase().contains(PREFERRED_ARCH)
    }
}

/// A release as returned by the GitHub releases API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Release {
    /// Git tag the release was cut from.
    #[serde(default)]
    pub tag_name: String,
    /// Attached files.
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// Choose the installer from a release's assets.
///
/// A 64-bit installer is preferred; otherwise the first installer in list
/// order. The filename is derived from the URL, not the asset name.
///
/// # Errors
///
/// Returns `NoCandidates` if no asset has an installer extension.
pub fn locate_installer_from_asset_list(assets: &[ReleaseAsset]) -> Result<InstallerResult> {
    assets
        .iter()
        .find(|a| a.is_preferred_arch() && a.is_installer())
        .or_else(|| assets.iter().find(|a| a.is_installer()))
        .map(|a| {
            tracing::debug!("Selected release asset {}", a.name);
            InstallerResult::new(a.url.clone())
        })
        .ok_or_else(|| FtcError::NoCandidates {
            origin: "release assets".to_string(),
        })
}
