//! `[sidebar]` section configuration.
//!
//! Sidebar navigation: forced ordering, collapsed-by-default paths, and
//! display flags.
//!
//! # Example
//!
//! ```toml
//! [sidebar]
//! title = "ReScript in Korean"
//! forced_nav_order = ["/Overview", "/Language-Features"]
//! collapsed_nav = ["/Overview/Introduction"]
//! ignore_index = true
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Sidebar navigation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Explicit ordering override for top-level nav entries. Listed paths
    /// come first, in this order; everything else follows alphabetically.
    pub forced_nav_order: Vec<String>,

    /// Paths whose nav subtree starts collapsed.
    pub collapsed_nav: Vec<String>,

    /// Extra links appended below the nav tree.
    pub links: Vec<SidebarLink>,

    /// Render a divider line before the link list.
    pub frontline: bool,

    /// Hide index pages from the nav tree.
    pub ignore_index: bool,

    /// Sidebar heading text.
    pub title: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            forced_nav_order: Vec::new(),
            collapsed_nav: Vec::new(),
            links: Vec::new(),
            frontline: false,
            ignore_index: true,
            title: String::new(),
        }
    }
}

/// A text/link pair rendered below the nav tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarLink {
    pub text: String,
    pub link: String,
}

/// Field paths for diagnostics.
pub struct SidebarFields {
    pub forced_nav_order: FieldPath,
    pub collapsed_nav: FieldPath,
}

impl SidebarConfig {
    pub const FIELDS: SidebarFields = SidebarFields {
        forced_nav_order: FieldPath::new("sidebar.forced_nav_order"),
        collapsed_nav: FieldPath::new("sidebar.collapsed_nav"),
    };

    /// Validate the sidebar section.
    ///
    /// Path entries must be site-absolute (`/...`). Whether they match real
    /// content is checked by `dokkit nav` against a content tree.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for path in &self.forced_nav_order {
            if !path.starts_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.forced_nav_order,
                    format!("'{path}' must start with '/'"),
                    format!("use \"/{path}\""),
                );
            }
        }

        for path in &self.collapsed_nav {
            if !path.starts_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.collapsed_nav,
                    format!("'{path}' must start with '/'"),
                    format!("use \"/{path}\""),
                );
            }
        }
    }

    /// Append trailing slashes to every path entry (idempotent).
    ///
    /// Called during load when `build.trailing_slash` is enabled so that
    /// entries compare equal to generated page paths.
    pub fn apply_trailing_slash(&mut self) {
        for path in self
            .forced_nav_order
            .iter_mut()
            .chain(self.collapsed_nav.iter_mut())
        {
            if !path.ends_with('/') {
                path.push('/');
            }
        }
    }

    /// Collapsed paths as a set, normalized without trailing slashes.
    pub fn collapsed_set(&self) -> FxHashSet<&str> {
        self.collapsed_nav
            .iter()
            .map(|p| p.trim_end_matches('/'))
            .collect()
    }
}
