//! Installer discovery.
//!
//! Given a download page (or a release asset list) and a target platform,
//! pick the single most appropriate installer link.
//!
//! - [`platform`] defines the per-platform preference rules
//! - [`locate`] scrapes and ranks links from page content
//! - [`assets`] selects from a structured release asset list
//! - [`provider`] knows where each supported product is published

pub mod assets;
pub mod locate;
pub mod platform;
pub mod provider;

pub use assets::{locate_installer_from_asset_list, Release, ReleaseAsset};
pub use locate::{derive_filename, extract_candidates, locate_installer, rank, InstallerResult};
pub use platform::Platform;
pub use provider::Provider;
