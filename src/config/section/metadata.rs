//! `[metadata]` section configuration.
//!
//! Site metadata consumed by the page `<head>`: title, description, social
//! preview image, docs source location, favicon.
//!
//! # Example
//!
//! ```toml
//! [metadata]
//! title = "ReScript in Korean"
//! description = "ReScript in Korean"
//! og_image = "/rescript-in-korean/og.png"
//! docs_location = "https://github.com/green-labs/rescript-in-korean/tree/main/content"
//! favicon = "https://green-labs.github.io/rescript-in-korean/favicon.png"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata for head tags and social previews.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Document title.
    pub title: String,

    /// Meta description.
    pub description: String,

    /// Social preview image, site-root path or full URL.
    pub og_image: String,

    /// URL of the documentation source tree ("edit this page" target).
    pub docs_location: String,

    /// Favicon, site-root path or full URL.
    pub favicon: String,
}

/// Field paths for diagnostics.
pub struct MetadataFields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub og_image: FieldPath,
    pub docs_location: FieldPath,
    pub favicon: FieldPath,
}

impl MetadataConfig {
    pub const FIELDS: MetadataFields = MetadataFields {
        title: FieldPath::new("metadata.title"),
        description: FieldPath::new("metadata.description"),
        og_image: FieldPath::new("metadata.og_image"),
        docs_location: FieldPath::new("metadata.docs_location"),
        favicon: FieldPath::new("metadata.favicon"),
    };

    /// Validate the metadata section.
    ///
    /// # Checks
    /// - `title` and `description` are required
    /// - path-like fields must be site-root paths (`/...`) or full URLs
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "required");
        }
        if self.description.trim().is_empty() {
            diag.error(Self::FIELDS.description, "required");
        }

        validate_resource(&self.og_image, Self::FIELDS.og_image, diag);
        validate_resource(&self.favicon, Self::FIELDS.favicon, diag);

        if !self.docs_location.is_empty() && url::Url::parse(&self.docs_location).is_err() {
            diag.error_with_hint(
                Self::FIELDS.docs_location,
                format!("'{}' is not a valid URL", self.docs_location),
                "point at the content tree, e.g.: https://github.com/org/repo/tree/main/content",
            );
        }
    }
}

/// A resource reference is valid when empty, a site-root path, or a URL.
fn validate_resource(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if value.is_empty() || value.starts_with('/') || url::Url::parse(value).is_ok() {
        return;
    }
    diag.error_with_hint(
        field,
        format!("'{value}' must be a site-root path or a full URL"),
        format!("use \"/{value}\" for a path relative to the published site root"),
    );
}
