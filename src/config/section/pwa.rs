//! `[pwa]` section configuration.
//!
//! Installable-app settings: the enable switch and the web-app-manifest
//! record emitted as `manifest.webmanifest`.
//!
//! # Example
//!
//! ```toml
//! [pwa]
//! enabled = true
//!
//! [pwa.manifest]
//! name = "ReScript in KR"
//! short_name = "ReScript-in-KR"
//! start_url = "/rescript-in-kr"
//! background_color = "#6b37bf"
//! theme_color = "#6b37bf"
//! display = "standalone"
//! icons = [{ src = "/favicon.png", sizes = "512x512", type = "image/png" }]
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// `<width>x<height>`, e.g. "512x512". Explicit class: the regex build
/// excludes Unicode-aware Perl classes like `\d`.
static ICON_SIZES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+x[0-9]+$").unwrap());

/// CSS hex colors, short or long form.
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// PWA settings.
///
/// Disabling `enabled` also retracts any previously emitted manifest and
/// service-worker descriptor (see `generator::manifest`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PwaConfig {
    /// Emit a web-app manifest and register the site as installable.
    pub enabled: bool,

    /// The manifest record, emitted verbatim as JSON.
    pub manifest: ManifestConfig,
}

/// `[pwa.manifest]` — standard web-app-manifest members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub background_color: String,
    pub theme_color: String,
    pub display: DisplayMode,

    /// Crossorigin attribute for the manifest `<link>` tag (not a manifest
    /// member; used when fetching the manifest needs credentials).
    pub cross_origin: CrossOrigin,

    pub icons: Vec<ManifestIcon>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            short_name: String::new(),
            start_url: "/".into(),
            background_color: "#ffffff".into(),
            theme_color: "#ffffff".into(),
            display: DisplayMode::default(),
            cross_origin: CrossOrigin::default(),
            icons: Vec::new(),
        }
    }
}

/// Manifest `display` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    #[default]
    Standalone,
    MinimalUi,
    Browser,
}

/// Crossorigin attribute values for the manifest link tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossOrigin {
    #[default]
    Anonymous,
    UseCredentials,
}

/// A manifest icon entry. All three members are required by installers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Field paths for diagnostics.
pub struct PwaFields {
    pub enabled: FieldPath,
    pub name: FieldPath,
    pub short_name: FieldPath,
    pub start_url: FieldPath,
    pub background_color: FieldPath,
    pub theme_color: FieldPath,
    pub icons: FieldPath,
}

impl PwaConfig {
    pub const FIELDS: PwaFields = PwaFields {
        enabled: FieldPath::new("pwa.enabled"),
        name: FieldPath::new("pwa.manifest.name"),
        short_name: FieldPath::new("pwa.manifest.short_name"),
        start_url: FieldPath::new("pwa.manifest.start_url"),
        background_color: FieldPath::new("pwa.manifest.background_color"),
        theme_color: FieldPath::new("pwa.manifest.theme_color"),
        icons: FieldPath::new("pwa.manifest.icons"),
    };

    /// Validate the PWA section.
    ///
    /// All checks are skipped when `enabled = false`: a stale manifest block
    /// must not fail the build.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enabled {
            return;
        }

        let manifest = &self.manifest;

        if manifest.name.trim().is_empty() {
            diag.error(
                Self::FIELDS.name,
                format!("required when {} is true", Self::FIELDS.enabled),
            );
        }

        if !manifest.start_url.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.start_url,
                format!("'{}' must start with '/'", manifest.start_url),
                "use a site-root path like \"/\" or \"/docs\"",
            );
        }

        validate_color(
            &manifest.background_color,
            Self::FIELDS.background_color,
            diag,
        );
        validate_color(&manifest.theme_color, Self::FIELDS.theme_color, diag);

        if manifest.icons.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.icons,
                format!("at least one icon is required when {} is true", Self::FIELDS.enabled),
                "add an entry like { src = \"/favicon.png\", sizes = \"512x512\", type = \"image/png\" }",
            );
        }

        for icon in &manifest.icons {
            icon.validate(diag);
        }
    }
}

impl ManifestIcon {
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.src.trim().is_empty() {
            diag.error(PwaConfig::FIELDS.icons, "icon entry is missing `src`");
        }

        if !ICON_SIZES_RE.is_match(&self.sizes) {
            diag.error_with_hint(
                PwaConfig::FIELDS.icons,
                format!("icon sizes '{}' is not of the form <width>x<height>", self.sizes),
                "use e.g. \"512x512\"",
            );
        }

        if !self.mime_type.starts_with("image/") {
            diag.error_with_hint(
                PwaConfig::FIELDS.icons,
                format!("icon type '{}' is not an image MIME type", self.mime_type),
                "use e.g. \"image/png\"",
            );
        }
    }
}

fn validate_color(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if !HEX_COLOR_RE.is_match(value) {
        diag.error_with_hint(
            field,
            format!("'{value}' is not a hex color"),
            "use \"#rgb\" or \"#rrggbb\", e.g. \"#6b37bf\"",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn enabled_pwa() -> PwaConfig {
        PwaConfig {
            enabled: true,
            manifest: ManifestConfig {
                name: "ReScript in KR".into(),
                short_name: "ReScript-in-KR".into(),
                start_url: "/rescript-in-kr".into(),
                background_color: "#6b37bf".into(),
                theme_color: "#6b37bf".into(),
                display: DisplayMode::Standalone,
                cross_origin: CrossOrigin::UseCredentials,
                icons: vec![ManifestIcon {
                    src: "https://green-labs.github.io/rescript-in-korean/favicon.png".into(),
                    sizes: "512x512".into(),
                    mime_type: "image/png".into(),
                }],
            },
        }
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(!config.pwa.enabled);
        assert_eq!(config.pwa.manifest.display, DisplayMode::Standalone);
        assert_eq!(config.pwa.manifest.start_url, "/");
    }

    #[test]
    fn test_enabled_with_valid_manifest() {
        let mut diag = ConfigDiagnostics::new();
        enabled_pwa().validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_disabled_skips_manifest_checks() {
        // Broken manifest must not fail validation while disabled
        let pwa = PwaConfig {
            enabled: false,
            manifest: ManifestConfig {
                icons: Vec::new(),
                background_color: "purple".into(),
                ..enabled_pwa().manifest
            },
        };
        let mut diag = ConfigDiagnostics::new();
        pwa.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_enabled_requires_icons() {
        let mut pwa = enabled_pwa();
        pwa.manifest.icons.clear();
        let mut diag = ConfigDiagnostics::new();
        pwa.validate(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "pwa.manifest.icons")
        );
    }

    #[test]
    fn test_icon_sizes_format() {
        let mut pwa = enabled_pwa();
        pwa.manifest.icons[0].sizes = "512".into();
        let mut diag = ConfigDiagnostics::new();
        pwa.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_icon_sizes_accepts_digit_pairs() {
        // First use compiles the sizes pattern; must not panic and must
        // accept plain <width>x<height> values
        for sizes in ["512x512", "192x192", "48x48"] {
            let mut pwa = enabled_pwa();
            pwa.manifest.icons[0].sizes = sizes.into();
            let mut diag = ConfigDiagnostics::new();
            pwa.validate(&mut diag);
            assert!(!diag.has_errors(), "{sizes} should be accepted");
        }
    }

    #[test]
    fn test_icon_type_must_be_image() {
        let mut pwa = enabled_pwa();
        pwa.manifest.icons[0].mime_type = "text/plain".into();
        let mut diag = ConfigDiagnostics::new();
        pwa.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_color_format() {
        let mut pwa = enabled_pwa();
        pwa.manifest.theme_color = "rebeccapurple".into();
        let mut diag = ConfigDiagnostics::new();
        pwa.validate(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "pwa.manifest.theme_color")
        );
    }

    #[test]
    fn test_short_hex_color_accepted() {
        let mut pwa = enabled_pwa();
        pwa.manifest.theme_color = "#fff".into();
        let mut diag = ConfigDiagnostics::new();
        pwa.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_display_mode_parses_kebab_case() {
        let config = test_parse_config("[pwa.manifest]\ndisplay = \"minimal-ui\"");
        assert_eq!(config.pwa.manifest.display, DisplayMode::MinimalUi);
    }

    #[test]
    fn test_cross_origin_parses() {
        let config = test_parse_config("[pwa.manifest]\ncross_origin = \"use-credentials\"");
        assert_eq!(config.pwa.manifest.cross_origin, CrossOrigin::UseCredentials);
    }

    #[test]
    fn test_icon_type_rename() {
        let config = test_parse_config(
            "[pwa.manifest]\nicons = [{ src = \"/favicon.png\", sizes = \"512x512\", type = \"image/png\" }]",
        );
        assert_eq!(config.pwa.manifest.icons[0].mime_type, "image/png");
    }
}
