//! Site configuration management for `dokkit.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── header     # [header] and [header.search]
//! │   ├── sidebar    # [sidebar]
//! │   ├── metadata   # [metadata]
//! │   └── pwa        # [pwa] and [pwa.manifest]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── env.rs         # Environment overrides for credentials
//! ├── util.rs        # Config file discovery, URL helpers
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The loaded [`SiteConfig`] is immutable: it is constructed once at
//! startup, validated, and passed by reference to every consumer. There is
//! no ambient global lookup.

pub mod env;
pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file};

// Re-export from section/
pub use section::{
    BuildConfig, HeaderConfig, HeaderLink, ManifestConfig, ManifestIcon, MetadataConfig,
    PwaConfig, SearchConfig, SidebarConfig, SidebarLink,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing dokkit.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Build settings (site URL, path prefix, analytics)
    pub build: BuildConfig,

    /// Header bar and search settings
    pub header: HeaderConfig,

    /// Sidebar navigation settings
    pub sidebar: SidebarConfig,

    /// Site metadata (title, description, previews)
    pub metadata: MetadataConfig,

    /// Installable-app settings
    pub pwa: PwaConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file. The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'dokkit init' to create one.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Set paths and apply overrides
        config.config_path = config_path;
        config.root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir()?;

        if cli.is_init() {
            let path = cwd.join(&cli.config);
            let exists = path.exists();
            return Ok((path, exists));
        }

        // Search upward from cwd
        match find_config_file(&cli.config) {
            Some(path) => Ok((path, true)),
            None => Ok((cwd.join(&cli.config), false)),
        }
    }

    /// Finalize configuration after loading.
    ///
    /// Order matters: environment overrides, then CLI overrides, then
    /// derived values and path normalization.
    fn finalize(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        env::apply_env_overrides(self);

        // Override site URL if provided via CLI (useful for CI deployments
        // where the production URL differs from the committed config)
        if let Some(url) = &cli.site_url {
            self.build.site_url = Some(url.clone());
        }

        self.sync_path_prefix_from_url();

        if self.build.trailing_slash {
            self.sidebar.apply_trailing_slash();
        }
    }

    /// Derive path_prefix from site_url when not set explicitly.
    ///
    /// This extracts the URL path component, enabling proper link generation
    /// for subdirectory deployments (e.g., GitHub Pages project sites).
    fn sync_path_prefix_from_url(&mut self) {
        if !self.build.path_prefix.is_empty() {
            return;
        }
        if let Some(url) = &self.build.site_url
            && let Some(path) = extract_url_path(url)
            && !path.is_empty()
        {
            self.build.path_prefix = format!("/{path}");
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (dokkit.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
        eprintln!();
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.collect_diagnostics();

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section validator, collecting diagnostics.
    pub fn collect_diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.build.validate(&mut diag);
        self.header.validate(&mut diag);
        self.sidebar.validate(&mut diag);
        self.metadata.validate(&mut diag);
        self.pwa.validate(&mut diag);

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML, panicking on unknown fields
/// (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// The ReScript-in-Korean starter configuration, ported to TOML.
#[cfg(test)]
pub const REFERENCE_CONFIG: &str = r##"
[build]
path_prefix = "/rescript-in-korean"
site_url = "https://green-labs.github.io/rescript-in-korean"
ga_tracking_id = "G-1KE5PEMPTL"
trailing_slash = false

[header]
logo = ""
logo_link = "https://green-labs.github.io/rescript-in-korean"
title = "ReScript in Korean"
github_url = "https://github.com/green-labs"
help_url = ""

[header.search]
enabled = true
index_name = "prod_gitbook"
app_id = "AWJNYMZ5J7"
search_key = "f09ab4cb7e4940cfafa619c094341740"

[sidebar]
forced_nav_order = [
    "/Overview",
    "/Language-Features",
    "/JavaScript-Interop",
    "/Build-System",
    "/Guides",
    "/Extra",
]
collapsed_nav = ["/Overview/Introduction", "/Installation"]
links = []
frontline = false
ignore_index = true
title = "ReScript in Korean"

[metadata]
title = "ReScript in Korean"
description = "ReScript in Korean"
og_image = "/rescript-in-korean/og.png"
docs_location = "https://github.com/green-labs/rescript-in-korean/tree/main/content"
favicon = "https://green-labs.github.io/rescript-in-korean/favicon.png"

[pwa]
enabled = false

[pwa.manifest]
name = "ReScript in KR"
short_name = "ReScript-in-KR"
start_url = "/rescript-in-kr"
background_color = "#6b37bf"
theme_color = "#6b37bf"
display = "standalone"
cross_origin = "use-credentials"
icons = [
    { src = "https://green-labs.github.io/rescript-in-korean/favicon.png", sizes = "512x512", type = "image/png" },
]
"##;

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = SiteConfig::from_str("[build\nsite_url = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_reference_config_loads_and_validates() {
        let config = test_parse_config(REFERENCE_CONFIG);

        assert_eq!(config.build.path_prefix, "/rescript-in-korean");
        assert_eq!(
            config.build.ga_tracking_id.as_deref(),
            Some("G-1KE5PEMPTL")
        );
        assert_eq!(config.header.title, "ReScript in Korean");
        assert_eq!(config.sidebar.forced_nav_order.len(), 6);
        assert!(!config.pwa.enabled);

        // Required fields all resolve non-empty
        let diag = config.collect_diagnostics();
        assert!(!diag.has_errors(), "{:?}", diag.errors());
    }

    #[test]
    fn test_search_enabled_without_credentials_fails() {
        let config = test_parse_config(
            "[build]\nsite_url = \"https://example.com\"\n\
             [metadata]\ntitle = \"T\"\ndescription = \"D\"\n\
             [header.search]\nenabled = true",
        );
        let diag = config.collect_diagnostics();
        assert!(diag.has_errors());
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"header.search.index_name"));
        assert!(fields.contains(&"header.search.app_id"));
        assert!(fields.contains(&"header.search.search_key"));
    }

    #[test]
    fn test_pwa_enabled_without_icons_fails() {
        let config = test_parse_config(
            "[build]\nsite_url = \"https://example.com\"\n\
             [metadata]\ntitle = \"T\"\ndescription = \"D\"\n\
             [pwa]\nenabled = true\n\
             [pwa.manifest]\nname = \"App\"",
        );
        let diag = config.collect_diagnostics();
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "pwa.manifest.icons")
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = test_parse_config(REFERENCE_CONFIG);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = test_parse_config(REFERENCE_CONFIG);
        let toml_out = toml::to_string(&config).unwrap();
        let parsed: SiteConfig = toml::from_str(&toml_out).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[metadata]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.metadata.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(REFERENCE_CONFIG).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_path_prefix_derived_from_site_url() {
        let mut config = test_parse_config(
            "[build]\nsite_url = \"https://example.github.io/my-docs\"",
        );
        config.sync_path_prefix_from_url();
        assert_eq!(config.build.path_prefix, "/my-docs");
    }

    #[test]
    fn test_explicit_path_prefix_wins() {
        let mut config = test_parse_config(
            "[build]\nsite_url = \"https://example.github.io/my-docs\"\npath_prefix = \"/other\"",
        );
        config.sync_path_prefix_from_url();
        assert_eq!(config.build.path_prefix, "/other");
    }

    #[test]
    fn test_trailing_slash_normalizes_sidebar() {
        let mut config = test_parse_config(
            "[build]\nsite_url = \"https://example.com\"\ntrailing_slash = true\n\
             [sidebar]\nforced_nav_order = [\"/Overview\"]",
        );
        if config.build.trailing_slash {
            config.sidebar.apply_trailing_slash();
        }
        assert_eq!(config.sidebar.forced_nav_order, vec!["/Overview/"]);
    }
}
