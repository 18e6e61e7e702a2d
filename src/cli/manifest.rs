//! `dokkit manifest` — emit or retract the web-app manifest.

use crate::{
    config::SiteConfig,
    generator::{manifest::ManifestOutcome, write_manifest},
    log,
};
use anyhow::Result;
use std::path::Path;

/// Run the manifest pass against `out` (relative paths resolve against the
/// project root).
pub fn emit_manifest(config: &SiteConfig, out: &Path) -> Result<()> {
    let out_dir = if out.is_absolute() {
        out.to_path_buf()
    } else {
        config.root_join(out)
    };

    match write_manifest(config, &out_dir)? {
        ManifestOutcome::Written(path) => {
            crate::debug!("manifest"; "wrote {}", path.display());
        }
        ManifestOutcome::Removed(paths) => {
            crate::debug!("manifest"; "removed {} stale artifact(s)", paths.len());
        }
        ManifestOutcome::Unchanged => {
            log!("manifest"; "pwa disabled, nothing to emit");
        }
    }

    Ok(())
}
