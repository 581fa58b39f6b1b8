//! Target platform for installer ranking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operating system family an installer is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    /// All platforms, in display order.
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Mac, Platform::Linux];

    /// Platform of the running host, or `None` for unsupported systems.
    pub fn detect() -> Option<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier (`std::env::consts::OS` style) to a platform.
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "windows" => Some(Self::Windows),
            "macos" | "darwin" => Some(Self::Mac),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    /// Lowercase name, also used as the substring hint in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Mac => "mac",
            Self::Linux => "linux",
        }
    }

    /// File extensions (lowercase, without dot) native to this platform.
    pub fn installer_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Windows => &["exe", "msi"],
            Self::Mac => &["dmg", "pkg"],
            Self::Linux => &["appimage", "deb", "tar.gz"],
        }
    }

    /// Whether a candidate link looks like an installer for this platform.
    ///
    /// Matches case-insensitively on a native extension or the platform name
    /// anywhere in the link.
    pub fn matches(&self, candidate: &str) -> bool {
        let lower = candidate.to_lowercase();
        self.installer_extensions()
            .iter()
            .any(|ext| has_extension(&lower, ext))
            || lower.contains(self.as_str())
    }
}

/// `link` ends in `.<ext>`; both sides expected lowercase.
pub(crate) fn has_extension(link: &str, ext: &str) -> bool {
    link.strip_suffix(ext)
        .is_some_and(|rest| rest.ends_with('.'))
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win" => Ok(Self::Windows),
            "mac" | "macos" | "darwin" | "osx" => Ok(Self::Mac),
            "linux" => Ok(Self::Linux),
            _ => Err(format!("unknown platform: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_os_maps_known_systems() {
        assert_eq!(Platform::from_os("windows"), Some(Platform::Windows));
        assert_eq!(Platform::from_os("macos"), Some(Platform::Mac));
        assert_eq!(Platform::from_os("darwin"), Some(Platform::Mac));
        assert_eq!(Platform::from_os("linux"), Some(Platform::Linux));
    }

    #[test]
    fn unsupported_os_has_no_platform() {
        assert_eq!(Platform::from_os("freebsd"), None);
        assert_eq!(Platform::from_os("android"), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn detect_on_linux() {
        assert_eq!(Platform::detect(), Some(Platform::Linux));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("MacOS".parse::<Platform>(), Ok(Platform::Mac));
        assert_eq!("win".parse::<Platform>(), Ok(Platform::Windows));
        assert!("beos".parse::<Platform>().is_err());
        assert_eq!(Platform::Linux.to_string(), "linux");
    }

    #[test]
    fn windows_rule() {
        assert!(Platform::Windows.matches("https://x/setup.EXE"));
        assert!(Platform::Windows.matches("https://x/setup.msi"));
        assert!(Platform::Windows.matches("https://x/windows/studio.zip"));
        assert!(!Platform::Windows.matches("https://x/studio.dmg"));
    }

    #[test]
    fn mac_rule() {
        assert!(Platform::Mac.matches("https://x/studio.dmg"));
        assert!(Platform::Mac.matches("https://x/studio.pkg"));
        assert!(Platform::Mac.matches("https://x/studio-mac-arm.zip"));
        assert!(!Platform::Mac.matches("https://x/studio.exe"));
    }

    #[test]
    fn linux_rule() {
        assert!(Platform::Linux.matches("https://x/Bambu_Studio.AppImage"));
        assert!(Platform::Linux.matches("https://x/studio.deb"));
        assert!(Platform::Linux.matches("https://x/studio.tar.gz"));
        assert!(Platform::Linux.matches("https://x/LINUX/studio.zip"));
        assert!(!Platform::Linux.matches("https://x/studio.exe"));
    }

    #[test]
    fn extension_requires_dot() {
        assert!(has_extension("a.deb", "deb"));
        assert!(!has_extension("adeb", "deb"));
        assert!(!has_extension("deb", "deb"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Platform::Mac).unwrap();
        assert_eq!(json, "\"mac\"");
    }
}
