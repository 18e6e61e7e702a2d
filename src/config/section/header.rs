//! `[header]` section configuration.
//!
//! Top navigation bar: logo, title, external links, and the
//! `[header.search]` sub-record wiring the Algolia-compatible search client.
//!
//! # Example
//!
//! ```toml
//! [header]
//! title = "ReScript in Korean"
//! logo_link = "https://green-labs.github.io/rescript-in-korean"
//! github_url = "https://github.com/green-labs"
//! links = [{ text = "Docs", link = "/Overview" }]
//!
//! [header.search]
//! enabled = true
//! index_name = "prod_gitbook"
//! # app_id / search_key / admin_key come from ALGOLIA_* env vars;
//! # TOML literals are local-development fallbacks only.
//! ```

use serde::{Deserialize, Serialize};

use crate::config::env::{ALGOLIA_ADMIN_KEY, ALGOLIA_APP_ID, ALGOLIA_SEARCH_KEY};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Header bar configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Logo image path (relative to site root) or URL. Empty uses the theme default.
    pub logo: String,

    /// Target URL when the logo is clicked.
    pub logo_link: String,

    /// Header title text.
    pub title: String,

    /// Repository URL shown as a GitHub button.
    pub github_url: String,

    /// Help link URL (empty hides the button).
    pub help_url: String,

    /// Extra navigation links.
    pub links: Vec<HeaderLink>,

    /// Search client settings.
    pub search: SearchConfig,
}

/// A text/link pair rendered in the header nav.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderLink {
    pub text: String,
    pub link: String,
}

/// `[header.search]` — Algolia-compatible search credentials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Enable the search widget and index uploads.
    pub enabled: bool,

    /// Index to query (e.g., "prod_gitbook").
    pub index_name: String,

    /// Application id. Overridden by `ALGOLIA_APP_ID`.
    pub app_id: Option<String>,

    /// Public search-only key. Overridden by `ALGOLIA_SEARCH_KEY`.
    pub search_key: Option<String>,

    /// Private indexing key. Should come from `ALGOLIA_ADMIN_KEY`.
    pub admin_key: Option<String>,

    /// Set during load when `admin_key` was supplied by the environment
    /// (see `config::env`), so validation can tell a committed literal
    /// from an injected secret.
    #[serde(skip)]
    pub admin_key_from_env: bool,
}

/// Field paths for diagnostics.
pub struct HeaderFields {
    pub links: FieldPath,
}

pub struct SearchFields {
    pub enabled: FieldPath,
    pub index_name: FieldPath,
    pub app_id: FieldPath,
    pub search_key: FieldPath,
    pub admin_key: FieldPath,
}

impl HeaderConfig {
    pub const FIELDS: HeaderFields = HeaderFields {
        links: FieldPath::new("header.links"),
    };

    /// Validate the header section.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for link in &self.links {
            // A link with text but no target renders as a dead entry
            if !link.text.is_empty() && link.link.is_empty() {
                diag.warn(
                    Self::FIELDS.links,
                    format!("link '{}' has no target URL", link.text),
                );
            }
        }

        self.search.validate(diag);
    }

    /// Links with both text and target (empty placeholder entries dropped).
    pub fn effective_links(&self) -> impl Iterator<Item = &HeaderLink> {
        self.links
            .iter()
            .filter(|l| !l.text.is_empty() && !l.link.is_empty())
    }
}

impl SearchConfig {
    pub const FIELDS: SearchFields = SearchFields {
        enabled: FieldPath::new("header.search.enabled"),
        index_name: FieldPath::new("header.search.index_name"),
        app_id: FieldPath::new("header.search.app_id"),
        search_key: FieldPath::new("header.search.search_key"),
        admin_key: FieldPath::new("header.search.admin_key"),
    };

    /// Validate the search sub-record.
    ///
    /// # Checks
    /// - When `enabled`, `index_name`, `app_id` and `search_key` must each
    ///   resolve non-empty (environment overrides are applied before this
    ///   runs, so a missing value means neither source provided it)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enabled {
            return;
        }

        if self.index_name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.index_name,
                format!("required when {} is true", Self::FIELDS.enabled),
                "set index_name, e.g.: \"prod_gitbook\"",
            );
        }

        if !resolved(&self.app_id) {
            diag.error_with_hint(
                Self::FIELDS.app_id,
                format!("required when {} is true", Self::FIELDS.enabled),
                format!("set the {ALGOLIA_APP_ID} environment variable"),
            );
        }

        if !resolved(&self.search_key) {
            diag.error_with_hint(
                Self::FIELDS.search_key,
                format!("required when {} is true", Self::FIELDS.enabled),
                format!("set the {ALGOLIA_SEARCH_KEY} environment variable"),
            );
        }

        // Admin key is only needed for index uploads, but a committed literal
        // is a leaked secret
        if self.admin_key.is_some() && !self.admin_key_from_env {
            diag.warn(
                Self::FIELDS.admin_key,
                format!("literal admin key in config; move it to {ALGOLIA_ADMIN_KEY}"),
            );
        }
    }
}

fn resolved(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}
