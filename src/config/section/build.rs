//! `[build]` section configuration.
//!
//! Site-wide build settings consumed by the routing and rendering layer.
//!
//! # Example
//!
//! ```toml
//! [build]
//! site_url = "https://green-labs.github.io/rescript-in-korean"
//! path_prefix = "/rescript-in-korean"
//! ga_tracking_id = "G-1KE5PEMPTL"
//! trailing_slash = false
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Google Analytics measurement id shapes (G-, UA-, GT-, AW- prefixes).
static GA_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(G|UA|GT|AW)-[A-Z0-9-]+$").unwrap());

/// Build settings: canonical URL, deployment prefix, analytics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// URL path prefix for subdirectory deployments (e.g., "/my-docs").
    /// Derived from `site_url` when left empty.
    pub path_prefix: String,

    /// Canonical site URL (e.g., "https://example.github.io/my-docs").
    pub site_url: Option<String>,

    /// Google Analytics tracking id (e.g., "G-1KE5PEMPTL").
    pub ga_tracking_id: Option<String>,

    /// Append a trailing slash to generated page paths.
    pub trailing_slash: bool,
}

/// Field paths for diagnostics.
pub struct BuildFields {
    pub path_prefix: FieldPath,
    pub site_url: FieldPath,
    pub ga_tracking_id: FieldPath,
    pub trailing_slash: FieldPath,
}

impl BuildConfig {
    pub const FIELDS: BuildFields = BuildFields {
        path_prefix: FieldPath::new("build.path_prefix"),
        site_url: FieldPath::new("build.site_url"),
        ga_tracking_id: FieldPath::new("build.ga_tracking_id"),
        trailing_slash: FieldPath::new("build.trailing_slash"),
    };

    /// Validate build configuration.
    ///
    /// # Checks
    /// - `site_url` must be set and parse as an absolute http(s) URL with host
    /// - `path_prefix` must be a valid URL path (leading `/`, no whitespace,
    ///   no empty segments)
    /// - `ga_tracking_id` format mismatch is a warning, not an error
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.validate_site_url(diag);
        self.validate_path_prefix(diag);

        if let Some(id) = &self.ga_tracking_id
            && !GA_ID_RE.is_match(id)
        {
            diag.warn(
                Self::FIELDS.ga_tracking_id,
                format!("'{id}' does not look like an analytics tracking id"),
            );
        }
    }

    fn validate_site_url(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.site_url else {
            diag.error_with_hint(
                Self::FIELDS.site_url,
                "required",
                "set site_url, e.g.: \"https://example.com\"",
            );
            return;
        };

        // URL format check using url crate for strict validation
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                // Must be http or https
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.site_url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                // Must have a valid host
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.site_url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.site_url,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }

    fn validate_path_prefix(&self, diag: &mut ConfigDiagnostics) {
        let prefix = &self.path_prefix;
        if prefix.is_empty() {
            return;
        }

        if !prefix.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.path_prefix,
                format!("'{prefix}' must start with '/'"),
                format!("use \"/{prefix}\""),
            );
            return;
        }

        if prefix.chars().any(char::is_whitespace) {
            diag.error(
                Self::FIELDS.path_prefix,
                format!("'{prefix}' must not contain whitespace"),
            );
        }

        // Empty segments ("//") break generated links
        if prefix.trim_start_matches('/').is_empty() || prefix.contains("//") {
            diag.error(
                Self::FIELDS.path_prefix,
                format!("'{prefix}' contains empty path segments"),
            );
        }
    }
}
