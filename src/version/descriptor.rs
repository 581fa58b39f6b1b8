//! Product descriptor parsing.
//!
//! IDEs built on the IntelliJ platform ship a `product-info.json` describing
//! their own identity. Only three of its fields matter here, and each may
//! hold a value of an unexpected type, so the document is decoded once into
//! a [`ProductDescriptor`] whose fields record what was actually present.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{FtcError, Result};

/// A single descriptor value, classified by JSON type.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DescriptorField {
    /// A JSON string.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
    /// Anything else (bool, null, array, object).
    Other(serde::de::IgnoredAny),
}

/// The version-bearing fields of a product descriptor.
#[derive(Debug, Clone, Default)]
pub struct ProductDescriptor {
    pub version_name: Option<DescriptorField>,
    pub version: Option<DescriptorField>,
    pub full_version: Option<DescriptorField>,
}

impl ProductDescriptor {
    /// Decode descriptor text.
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` if the text is not a JSON object.
    pub fn parse(text: &str) -> Result<Self> {
        let mut fields: HashMap<String, DescriptorField> = serde_json::from_str(text)
            .map_err(|e| FtcError::malformed(format!("invalid product descriptor: {}", e)))?;

        Ok(Self {
            version_name: fields.remove("versionName"),
            version: fields.remove("version"),
            full_version: fields.remove("fullVersion"),
        })
    }

    /// Pick the canonical version string.
    ///
    /// Priority: `versionName` (string), `version` (string or number),
    /// `fullVersion` (string). Empty strings are treated as absent.
    pub fn version(&self) -> Option<String> {
        text_value(self.version_name.as_ref())
            .or_else(|| match self.version.as_ref() {
                Some(DescriptorField::Number(n)) => Some(format_number(n)),
                other => text_value(other),
            })
            .or_else(|| text_value(self.full_version.as_ref()))
    }
}

fn text_value(field: Option<&DescriptorField>) -> Option<String> {
    match field {
        Some(DescriptorField::Text(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

/// Format a JSON number as a plain decimal string.
///
/// Integers are printed as-is. Floats never use scientific notation and lose
/// trailing fractional zeros and a dangling decimal point; zeros in the
/// integer part are kept (`100.0` is `"100"`).
pub fn format_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) => format_decimal(f),
        None => n.to_string(),
    }
}

/// Format a float without exponent or fractional zero padding.
pub fn format_decimal(value: f64) -> String {
    // f64's Display never switches to exponent notation.
    let formatted = format!("{}", value);
    trim_fraction(&formatted).to_string()
}

fn trim_fraction(s: &str) -> &str {
    match s.find('.') {
        Some(_) => s.trim_end_matches('0').trim_end_matches('.'),
        None => s,
    }
}

/// Extract a version string from product descriptor JSON.
///
/// # Errors
///
/// - `MalformedInput` if the text is not a JSON object
/// - `NotFound` if none of the version fields hold a usable value
pub fn extract_version_from_descriptor(json_text: &str) -> Result<String> {
    let descriptor = ProductDescriptor::parse(json_text)?;
    descriptor
        .version()
        .ok_or_else(|| FtcError::not_found("no version field in product descriptor"))
}
