//! Sidebar navigation ordering.
//!
//! Resolves the final order of nav entries from a set of content paths and
//! the `[sidebar]` section: forced entries first (in declared order),
//! everything else alphabetically.

mod scan;

pub use scan::scan_content_paths;

use serde::Serialize;

use crate::config::{ConfigDiagnostics, SidebarConfig};

/// A resolved navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Site-absolute path (e.g., "/Overview/Introduction").
    pub path: String,
    /// Start with the subtree collapsed.
    pub collapsed: bool,
}

/// Resolve the navigation order for `paths`.
///
/// Forced entries claim every path equal to them or nested under them
/// (prefix match on `/` boundaries); claimed groups keep the declared
/// order, sorted lexicographically within each group. Remaining paths
/// follow, sorted lexicographically. With `ignore_index`, index pages are
/// dropped.
///
/// Forced entries matching no content path are reported as warnings (the
/// ordering itself never fails).
pub fn resolve_nav_order(
    paths: &[String],
    sidebar: &SidebarConfig,
    diag: &mut ConfigDiagnostics,
) -> Vec<NavItem> {
    let collapsed = sidebar.collapsed_set();

    let mut remaining: Vec<&str> = paths
        .iter()
        .map(String::as_str)
        .filter(|p| !(sidebar.ignore_index && is_index_path(p)))
        .collect();

    let mut ordered = Vec::with_capacity(remaining.len());

    for forced in &sidebar.forced_nav_order {
        let mut claimed: Vec<&str> = Vec::new();
        remaining.retain(|path| {
            if path_is_under(path, forced) {
                claimed.push(path);
                false
            } else {
                true
            }
        });

        if claimed.is_empty() {
            diag.warn(
                SidebarConfig::FIELDS.forced_nav_order,
                format!("'{forced}' matches no content path"),
            );
            continue;
        }

        claimed.sort_unstable();
        ordered.extend(claimed);
    }

    remaining.sort_unstable();
    ordered.extend(remaining);

    ordered
        .into_iter()
        .map(|path| NavItem {
            path: path.to_string(),
            collapsed: is_collapsed(path, &collapsed),
        })
        .collect()
}

/// True when `path` equals `prefix` or is nested under it on a `/` boundary.
/// Trailing slashes on either side are ignored.
fn path_is_under(path: &str, prefix: &str) -> bool {
    let path = path.trim_end_matches('/');
    let prefix = prefix.trim_end_matches('/');
    path == prefix || (path.starts_with(prefix) && path.as_bytes()[prefix.len()] == b'/')
}

/// True for "/index" and any path ending in "/index".
fn is_index_path(path: &str) -> bool {
    path.trim_end_matches('/').ends_with("/index")
}

/// A path is collapsed when it or any ancestor is in the collapsed set.
fn is_collapsed(path: &str, collapsed: &rustc_hash::FxHashSet<&str>) -> bool {
    let mut current = path.trim_end_matches('/');
    loop {
        if collapsed.contains(current) {
            return true;
        }
        match current.rfind('/') {
            Some(0) | None => return false,
            Some(idx) => current = &current[..idx],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar(forced: &[&str], collapsed: &[&str]) -> SidebarConfig {
        SidebarConfig {
            forced_nav_order: forced.iter().map(|s| s.to_string()).collect(),
            collapsed_nav: collapsed.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn resolved_paths(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|i| i.path.as_str()).collect()
    }

    #[test]
    fn test_forced_entries_come_first_in_declared_order() {
        let content = paths(&[
            "/Build-System",
            "/Language-Features",
            "/Extra",
            "/Overview",
        ]);
        let sidebar = sidebar(&["/Overview", "/Language-Features"], &[]);
        let mut diag = ConfigDiagnostics::new();

        let nav = resolve_nav_order(&content, &sidebar, &mut diag);
        assert_eq!(
            resolved_paths(&nav),
            vec!["/Overview", "/Language-Features", "/Build-System", "/Extra"]
        );
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_forced_entry_claims_nested_paths() {
        let content = paths(&[
            "/Guides",
            "/Overview/Installation",
            "/Overview",
            "/Overview/Introduction",
        ]);
        let sidebar = sidebar(&["/Overview"], &[]);
        let mut diag = ConfigDiagnostics::new();

        let nav = resolve_nav_order(&content, &sidebar, &mut diag);
        assert_eq!(
            resolved_paths(&nav),
            vec![
                "/Overview",
                "/Overview/Installation",
                "/Overview/Introduction",
                "/Guides"
            ]
        );
    }

    #[test]
    fn test_prefix_match_respects_path_boundaries() {
        // "/Over" must not claim "/Overview"
        let content = paths(&["/Overview", "/Over"]);
        let sidebar = sidebar(&["/Over"], &[]);
        let mut diag = ConfigDiagnostics::new();

        let nav = resolve_nav_order(&content, &sidebar, &mut diag);
        assert_eq!(resolved_paths(&nav), vec!["/Over", "/Overview"]);
    }

    #[test]
    fn test_unmatched_forced_entry_warns() {
        let content = paths(&["/Guides"]);
        let sidebar = sidebar(&["/Missing"], &[]);
        let mut diag = ConfigDiagnostics::new();

        let nav = resolve_nav_order(&content, &sidebar, &mut diag);
        assert_eq!(resolved_paths(&nav), vec!["/Guides"]);
        assert_eq!(diag.warnings().len(), 1);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_ignore_index_drops_index_pages() {
        let content = paths(&["/index", "/Overview/index", "/Overview/Introduction"]);
        let sidebar = sidebar(&[], &[]);
        let mut diag = ConfigDiagnostics::new();

        let nav = resolve_nav_order(&content, &sidebar, &mut diag);
        assert_eq!(resolved_paths(&nav), vec!["/Overview/Introduction"]);
    }

    #[test]
    fn test_index_kept_when_ignore_index_disabled() {
        let content = paths(&["/index", "/Guides"]);
        let mut sidebar = sidebar(&[], &[]);
        sidebar.ignore_index = false;
        let mut diag = ConfigDiagnostics::new();

        let nav = resolve_nav_order(&content, &sidebar, &mut diag);
        assert_eq!(resolved_paths(&nav), vec!["/Guides", "/index"]);
    }

    #[test]
    fn test_collapsed_applies_to_path_and_descendants() {
        let content = paths(&[
            "/Overview/Introduction",
            "/Overview/Introduction/Why",
            "/Overview/Installation",
        ]);
        let sidebar = sidebar(&["/Overview"], &["/Overview/Introduction"]);
        let mut diag = ConfigDiagnostics::new();

        let nav = resolve_nav_order(&content, &sidebar, &mut diag);
        let collapsed: Vec<_> = nav
            .iter()
            .filter(|i| i.collapsed)
            .map(|i| i.path.as_str())
            .collect();
        assert_eq!(
            collapsed,
            vec!["/Overview/Introduction", "/Overview/Introduction/Why"]
        );
    }

    #[test]
    fn test_trailing_slash_entries_match() {
        // Entries normalized for trailing_slash = true still order correctly
        let content = paths(&["/Guides/", "/Overview/"]);
        let sidebar = sidebar(&["/Overview/"], &[]);
        let mut diag = ConfigDiagnostics::new();

        let nav = resolve_nav_order(&content, &sidebar, &mut diag);
        assert_eq!(resolved_paths(&nav), vec!["/Overview/", "/Guides/"]);
        assert!(diag.warnings().is_empty());
    }
}
