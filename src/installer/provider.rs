//! Known installer download sources.

use std::fmt;

use crate::error::{FtcError, Result};
use crate::fetch::HttpFetcher;

use super::assets::{locate_installer_from_asset_list, Release};
use super::locate::{locate_filtered, InstallerResult};
use super::platform::Platform;

/// A source of installer downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Android Studio, scraped from the developer site.
    AndroidStudio,
    /// Bambu Studio slicer, scraped from the vendor download page.
    BambuStudio,
    /// REV Hardware Client, scraped from the REV docs (Windows only).
    RevHardwareClient,
    /// Git for Windows, from the GitHub latest-release API.
    GitForWindows,
}

impl Provider {
    /// Human-readable product name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AndroidStudio => "Android Studio",
            Self::BambuStudio => "Bambu Studio",
            Self::RevHardwareClient => "REV Hardware Client",
            Self::GitForWindows => "Git for Windows",
        }
    }

    /// Where discovery fetches from unless overridden.
    pub fn default_url(&self) -> &'static str {
        match self {
            Self::AndroidStudio => "https://developer.android.com/studio",
            Self::BambuStudio => "https://bambulab.com/en-us/download/studio",
            Self::RevHardwareClient => {
                "https://docs.revrobotics.com/rev-hardware-client/gs/install"
            }
            Self::GitForWindows => {
                "https://api.github.com/repos/git-for-windows/git/releases/latest"
            }
        }
    }

    /// Platform to rank candidates for.
    ///
    /// Windows-only products ignore the host. Cross-platform products need a
    /// supported host; `None` means discovery cannot proceed.
    pub fn target_platform(&self, host: Option<Platform>) -> Option<Platform> {
        match self {
            Self::AndroidStudio | Self::BambuStudio => host,
            Self::RevHardwareClient | Self::GitForWindows => Some(Platform::Windows),
        }
    }

    /// Whether a scraped link belongs to this product.
    fn accepts_link(&self, link: &str) -> bool {
        match self {
            Self::AndroidStudio => {
                link.contains("android-studio") || link.contains("android/studio")
            }
            _ => true,
        }
    }

    /// Find the installer for `host`, fetching from `url`.
    ///
    /// # Errors
    ///
    /// - `UnsupportedPlatform` if the product needs a host platform and there is none
    /// - `FetchFailed` if the source cannot be retrieved
    /// - `MalformedInput` if a release API response is not the expected JSON
    /// - `NoCandidates` if the source lists no installer
    pub fn discover(
        &self,
        fetcher: &HttpFetcher,
        url: &str,
        host: Option<Platform>,
    ) -> Result<InstallerResult> {
        let platform = self
            .target_platform(host)
            .ok_or_else(|| FtcError::UnsupportedPlatform {
                os: std::env::consts::OS.to_string(),
            })?;
        tracing::info!("Looking up {} installer for {}", self.name(), platform);

        match self {
            Self::GitForWindows => {
                let release: Release = fetcher.fetch_json(url)?;
                tracing::debug!(
                    "Release {} has {} assets",
                    release.tag_name,
                    release.assets.len()
                );
                locate_installer_from_asset_list(&release.assets)
            }
            _ => {
                let page = fetcher.fetch(url)?;
                let origin = format!("{} download page", self.name());
                locate_filtered(&page, platform, &origin, |link| self.accepts_link(link))
            }
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use httpmock::prelude::*;

    const STUDIO_PAGE: &str = r#"
        <a href="https://developer.android.com/static/images/hero.zip">assets</a>
        <a href="https://redirector.gvt1.com/edgedl/android/studio/install/2024.1.1.11/android-studio-2024.1.1.11-windows.exe">Windows</a>
        <a href="https://redirector.gvt1.com/edgedl/android/studio/install/2024.1.1.11/android-studio-2024.1.1.11-mac_arm.dmg">Mac</a>
        <a href="https://redirector.gvt1.com/edgedl/android/studio/ide-zips/2024.1.1.11/android-studio-2024.1.1.11-linux.tar.gz">Linux</a>
    "#;

    #[test]
    fn target_platform_for_cross_platform_products() {
        assert_eq!(
            Provider::BambuStudio.target_platform(Some(Platform::Mac)),
            Some(Platform::Mac)
        );
        assert_eq!(Provider::AndroidStudio.target_platform(None), None);
    }

    #[test]
    fn windows_only_products_ignore_host() {
        assert_eq!(
            Provider::RevHardwareClient.target_platform(Some(Platform::Linux)),
            Some(Platform::Windows)
        );
        assert_eq!(
            Provider::GitForWindows.target_platform(None),
            Some(Platform::Windows)
        );
    }

    #[test]
    fn unsupported_host_fails_before_fetch() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/studio");
            then.status(200).body(STUDIO_PAGE);
        });

        let fetcher = HttpFetcher::new().unwrap();
        let err = Provider::AndroidStudio
            .discover(&fetcher, &server.url("/studio"), None)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnsupportedPlatform);
        mock.assert_calls(0);
    }

    #[test]
    fn android_studio_ignores_unrelated_links() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/studio");
            then.status(200).body(STUDIO_PAGE);
        });

        let fetcher = HttpFetcher::new().unwrap();
        let url = server.url("/studio");
        let linux = Provider::AndroidStudio
            .discover(&fetcher, &url, Some(Platform::Linux))
            .unwrap();
        assert!(linux.url.ends_with("android-studio-2024.1.1.11-linux.tar.gz"));

        let mac = Provider::AndroidStudio
            .discover(&fetcher, &url, Some(Platform::Mac))
            .unwrap();
        assert_eq!(
            mac.filename.as_deref(),
            Some("android-studio-2024.1.1.11-mac_arm.dmg")
        );
    }

    #[test]
    fn rev_client_prefers_windows_installer() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/install");
            then.status(200).body(
                r#"<a href="https://github.com/REVrobotics/client/releases/REV-Hardware-Client.zip">zip</a>
                   <a href="https://github.com/REVrobotics/client/releases/REV-Hardware-Client-Setup-1.6.0.exe">exe</a>"#,
            );
        });

        let fetcher = HttpFetcher::new().unwrap();
        let result = Provider::RevHardwareClient
            .discover(&fetcher, &server.url("/install"), Some(Platform::Mac))
            .unwrap();
        assert_eq!(
            result.filename.as_deref(),
            Some("REV-Hardware-Client-Setup-1.6.0.exe")
        );
    }

    #[test]
    fn bambu_page_without_links_has_no_candidates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/download");
            then.status(200).body("<html><body>Loading...</body></html>");
        });

        let fetcher = HttpFetcher::new().unwrap();
        let err = Provider::BambuStudio
            .discover(&fetcher, &server.url("/download"), Some(Platform::Windows))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoCandidates);
        assert!(err.to_string().contains("Bambu Studio"));
    }

    #[test]
    fn page_fetch_failure_is_passed_through() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/download");
            then.status(503);
        });

        let fetcher = HttpFetcher::new().unwrap();
        let err = Provider::BambuStudio
            .discover(&fetcher, &server.url("/download"), Some(Platform::Linux))
            .unwrap_err();
        match err {
            FtcError::FetchFailed { status, .. } => assert_eq!(status, Some(503)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn git_for_windows_uses_release_assets() {
        let server = MockServer::start();
        let assets_url = server.url("/dl/Git-2.44.0-64-bit.exe");
        let body = format!(
            r#"{{"tag_name":"v2.44.0.windows.1","assets":[
                {{"name":"Git-2.44.0-32-bit.exe","browser_download_url":"{0}32"}},
                {{"name":"Git-2.44.0-64-bit.exe","browser_download_url":"{0}"}}
            ]}}"#,
            assets_url
        );
        server.mock(|when, then| {
            when.method(GET).path("/releases/latest");
            then.status(200).body(body);
        });

        let fetcher = HttpFetcher::new().unwrap();
        let result = Provider::GitForWindows
            .discover(&fetcher, &server.url("/releases/latest"), None)
            .unwrap();
        assert_eq!(result.url, assets_url);
        assert_eq!(result.filename.as_deref(), Some("Git-2.44.0-64-bit.exe"));
    }

    #[test]
    fn git_for_windows_bad_json_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases/latest");
            then.status(200).body("{ not json");
        });

        let fetcher = HttpFetcher::new().unwrap();
        let err = Provider::GitForWindows
            .discover(&fetcher, &server.url("/releases/latest"), None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn display_uses_product_name() {
        assert_eq!(Provider::GitForWindows.to_string(), "Git for Windows");
    }
}
