//! Version-string extraction.
//!
//! Two independent rules turn raw tool output into a canonical version:
//!
//! - [`descriptor`] reads a JSON product descriptor (`product-info.json`)
//! - [`banner`] reads a free-text version banner (`git version 2.39.1`)
//!
//! Both are pure functions of their input. [`detect`] wires them to the
//! filesystem and subprocesses.
//!
//! # Example
//!
//! ```
//! use ftc_helper::version::{extract_version_from_banner, extract_version_from_descriptor};
//!
//! assert_eq!(extract_version_from_banner("git version 2.39.1.windows.1").unwrap(), "2.39.1");
//! assert_eq!(extract_version_from_descriptor(r#"{"version": 14.0}"#).unwrap(), "14");
//! ```

pub mod banner;
pub mod descriptor;
pub mod detect;

pub use banner::extract_version_from_banner;
pub use descriptor::{extract_version_from_descriptor, DescriptorField, ProductDescriptor};
pub use detect::{
    detect_android_studio_version, detect_git_version, detect_self_version,
    locate_android_studio,
};
