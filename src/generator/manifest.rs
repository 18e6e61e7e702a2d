//! Web-app manifest emission.
//!
//! Serializes the `[pwa.manifest]` record into a standard
//! `manifest.webmanifest` document. When PWA support is disabled, any
//! previously emitted manifest and service-worker descriptor are removed so
//! installers stop treating the site as an app.
//!
//! # Manifest Format
//!
//! ```json
//! {
//!   "name": "ReScript in KR",
//!   "short_name": "ReScript-in-KR",
//!   "start_url": "/rescript-in-kr",
//!   "background_color": "#6b37bf",
//!   "theme_color": "#6b37bf",
//!   "display": "standalone",
//!   "icons": [{ "src": "...", "sizes": "512x512", "type": "image/png" }]
//! }
//! ```

use crate::{
    config::{ManifestConfig, SiteConfig},
    log,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Emitted manifest filename.
pub const MANIFEST_FILE: &str = "manifest.webmanifest";

/// Service-worker descriptor retracted alongside the manifest.
pub const SERVICE_WORKER_FILE: &str = "sw.js";

/// Result of a manifest pass over the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestOutcome {
    /// Manifest written to this path.
    Written(PathBuf),
    /// PWA disabled, stale artifacts removed.
    Removed(Vec<PathBuf>),
    /// PWA disabled, nothing to remove.
    Unchanged,
}

/// The manifest document as emitted. Only standard members appear here;
/// `cross_origin` configures the `<link>` tag and stays out of the JSON.
#[derive(Debug, Serialize)]
struct WebAppManifest<'a> {
    name: &'a str,
    short_name: &'a str,
    start_url: &'a str,
    background_color: &'a str,
    theme_color: &'a str,
    display: crate::config::section::DisplayMode,
    icons: &'a [crate::config::ManifestIcon],
}

impl<'a> WebAppManifest<'a> {
    fn new(manifest: &'a ManifestConfig) -> Self {
        Self {
            name: &manifest.name,
            short_name: &manifest.short_name,
            start_url: &manifest.start_url,
            background_color: &manifest.background_color,
            theme_color: &manifest.theme_color,
            display: manifest.display,
            icons: &manifest.icons,
        }
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write or retract the manifest in `out_dir`.
pub fn write_manifest(config: &SiteConfig, out_dir: &Path) -> Result<ManifestOutcome> {
    if config.pwa.enabled {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create '{}'", out_dir.display()))?;

        let path = out_dir.join(MANIFEST_FILE);
        let json = WebAppManifest::new(&config.pwa.manifest).to_json()?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write manifest to {}", path.display()))?;

        log!("manifest"; "{}", MANIFEST_FILE);
        return Ok(ManifestOutcome::Written(path));
    }

    // Disabled: retract stale installable-app artifacts
    let mut removed = Vec::new();
    for file in [MANIFEST_FILE, SERVICE_WORKER_FILE] {
        let path = out_dir.join(file);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove stale '{}'", path.display()))?;
            log!("manifest"; "removed stale {}", file);
            removed.push(path);
        }
    }

    if removed.is_empty() {
        Ok(ManifestOutcome::Unchanged)
    } else {
        Ok(ManifestOutcome::Removed(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn enabled_config() -> SiteConfig {
        test_parse_config(
            r##"
[pwa]
enabled = true

[pwa.manifest]
name = "ReScript in KR"
short_name = "ReScript-in-KR"
start_url = "/rescript-in-kr"
background_color = "#6b37bf"
theme_color = "#6b37bf"
display = "standalone"
icons = [{ src = "/favicon.png", sizes = "512x512", type = "image/png" }]
"##,
        )
    }

    #[test]
    fn test_enabled_writes_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let config = enabled_config();

        let outcome = write_manifest(&config, dir.path()).unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        assert_eq!(outcome, ManifestOutcome::Written(path.clone()));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["name"], "ReScript in KR");
        assert_eq!(json["short_name"], "ReScript-in-KR");
        assert_eq!(json["display"], "standalone");
        assert_eq!(json["icons"][0]["sizes"], "512x512");
        assert_eq!(json["icons"][0]["type"], "image/png");
        // Link-tag attribute, not a manifest member
        assert!(json.get("cross_origin").is_none());
    }

    #[test]
    fn test_disabled_removes_stale_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = enabled_config();

        write_manifest(&config, dir.path()).unwrap();
        fs::write(dir.path().join(SERVICE_WORKER_FILE), "// sw").unwrap();

        config.pwa.enabled = false;
        let outcome = write_manifest(&config, dir.path()).unwrap();

        assert!(matches!(outcome, ManifestOutcome::Removed(ref r) if r.len() == 2));
        assert!(!dir.path().join(MANIFEST_FILE).exists());
        assert!(!dir.path().join(SERVICE_WORKER_FILE).exists());
    }

    #[test]
    fn test_disabled_clean_output_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = enabled_config();
        config.pwa.enabled = false;

        let outcome = write_manifest(&config, dir.path()).unwrap();
        assert_eq!(outcome, ManifestOutcome::Unchanged);
    }

    #[test]
    fn test_disabled_ignores_manifest_contents() {
        // A broken manifest block must not matter while disabled
        let dir = tempfile::tempdir().unwrap();
        let mut config = enabled_config();
        config.pwa.enabled = false;
        config.pwa.manifest.icons.clear();

        assert!(write_manifest(&config, dir.path()).is_ok());
    }
}
