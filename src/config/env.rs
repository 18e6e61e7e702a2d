//! Environment-variable overrides for secret-like fields.
//!
//! Search credentials should come from the environment in CI/deploy
//! settings; TOML literals are accepted only as local-development
//! fallbacks. Environment values always win over literals.

use crate::config::SiteConfig;

/// Env var providing the Algolia application id.
pub const ALGOLIA_APP_ID: &str = "ALGOLIA_APP_ID";
/// Env var providing the public search-only key.
pub const ALGOLIA_SEARCH_KEY: &str = "ALGOLIA_SEARCH_KEY";
/// Env var providing the private admin (indexing) key.
pub const ALGOLIA_ADMIN_KEY: &str = "ALGOLIA_ADMIN_KEY";

/// Apply environment overrides to the loaded config.
///
/// Empty env values are treated as unset. Records which secrets came from
/// the environment so validation can flag committed literals without
/// re-reading the environment itself.
pub fn apply_env_overrides(config: &mut SiteConfig) {
    let search = &mut config.header.search;

    override_from_env(&mut search.app_id, ALGOLIA_APP_ID);
    override_from_env(&mut search.search_key, ALGOLIA_SEARCH_KEY);
    search.admin_key_from_env = override_from_env(&mut search.admin_key, ALGOLIA_ADMIN_KEY);
}

/// Returns true when the variable was set and applied.
fn override_from_env(field: &mut Option<String>, var: &str) -> bool {
    if let Ok(value) = std::env::var(var)
        && !value.trim().is_empty()
    {
        *field = Some(value);
        return true;
    }
    false
}
