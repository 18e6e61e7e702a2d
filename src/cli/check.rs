//! `dokkit check` — load and validate the configuration.

use crate::{config::SiteConfig, log};
use anyhow::Result;
use owo_colors::OwoColorize;

/// Report validation status for an already-loaded config.
///
/// Loading performs validation and fails on errors, so reaching this point
/// means the config is valid; this prints the summary.
pub fn check_config(config: &SiteConfig) -> Result<()> {
    log!("check"; "{} {}", config.config_path.display(), "ok".green().bold());

    crate::debug!("check"; "site_url = {}", config.build.site_url.as_deref().unwrap_or("-"));
    crate::debug!("check"; "path_prefix = {}",
        if config.build.path_prefix.is_empty() { "-" } else { &config.build.path_prefix });
    crate::debug!("check"; "search enabled = {}", config.header.search.enabled);
    crate::debug!("check"; "pwa enabled = {}", config.pwa.enabled);

    Ok(())
}
