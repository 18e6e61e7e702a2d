//! `dokkit init` — write a starter configuration file.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::fs;

/// Generate dokkit.toml content with comments
fn generate_config_template() -> String {
    format!(
        r##"# Dokkit configuration file (v{version})
# https://github.com/dokkit-rs/dokkit

[build]
# Canonical site URL. The path component becomes path_prefix for
# subdirectory deployments (e.g., GitHub Pages project sites).
site_url = "https://example.github.io/my-docs"
# ga_tracking_id = "G-XXXXXXXXXX"
trailing_slash = false

[header]
title = "My Docs"
logo = ""
logo_link = ""
github_url = ""
links = []

[header.search]
enabled = false
index_name = ""
# Credentials come from ALGOLIA_APP_ID / ALGOLIA_SEARCH_KEY /
# ALGOLIA_ADMIN_KEY environment variables. TOML literals are
# local-development fallbacks only; never commit the admin key.

[sidebar]
title = "My Docs"
forced_nav_order = []
collapsed_nav = []
links = []
frontline = false
ignore_index = true

[metadata]
title = "My Docs"
description = "Documentation"
og_image = ""
docs_location = ""
favicon = ""

[pwa]
# Disabling this also retracts a previously emitted manifest and
# service worker on the next `dokkit manifest` run.
enabled = false

[pwa.manifest]
name = "My Docs"
short_name = "Docs"
start_url = "/"
background_color = "#ffffff"
theme_color = "#ffffff"
display = "standalone"
icons = []
"##,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Write a starter config file.
///
/// Refuses to overwrite an existing config. If `dry_run` is true, only
/// prints the template to stdout.
pub fn init_config(config: &SiteConfig, dry_run: bool) -> Result<()> {
    let template = generate_config_template();

    if dry_run {
        print!("{template}");
        return Ok(());
    }

    let path = &config.config_path;
    if path.exists() {
        bail!("'{}' already exists, refusing to overwrite", path.display());
    }

    fs::write(path, template)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
