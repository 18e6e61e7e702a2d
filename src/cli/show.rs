//! `dokkit show` — print the resolved configuration.

use crate::config::SiteConfig;
use anyhow::Result;

const REDACTED: &str = "<redacted>";

/// Print the resolved config as TOML (default) or JSON.
///
/// Secret-like fields (search key, admin key) are redacted unless
/// `reveal_secrets` is set, so the output is safe to paste into issues.
pub fn show_config(
    config: &SiteConfig,
    json: bool,
    pretty: bool,
    reveal_secrets: bool,
) -> Result<()> {
    let mut config = config.clone();
    if !reveal_secrets {
        redact_secrets(&mut config);
    }

    let formatted = if json {
        if pretty {
            serde_json::to_string_pretty(&config)?
        } else {
            serde_json::to_string(&config)?
        }
    } else {
        toml::to_string_pretty(&config)?
    };

    println!("{formatted}");
    Ok(())
}

fn redact_secrets(config: &mut SiteConfig) {
    let search = &mut config.header.search;
    for secret in [&mut search.search_key, &mut search.admin_key] {
        if secret.is_some() {
            *secret = Some(REDACTED.to_string());
        }
    }
}
