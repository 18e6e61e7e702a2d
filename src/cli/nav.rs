//! `dokkit nav` — resolve the sidebar navigation order.

use crate::{
    config::SiteConfig,
    log,
    nav::{NavItem, resolve_nav_order, scan_content_paths},
};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

/// Scan the content tree, resolve the nav order, and print it.
pub fn run_nav(config: &SiteConfig, content: &Path, json: bool) -> Result<()> {
    let content_dir = if content.is_absolute() {
        content.to_path_buf()
    } else {
        config.root_join(content)
    };

    let paths = scan_content_paths(&content_dir, config.build.trailing_slash)?;
    crate::debug!("nav"; "scanned {} content file(s)", paths.len());

    let mut diag = crate::config::ConfigDiagnostics::new();
    let nav = resolve_nav_order(&paths, &config.sidebar, &mut diag);

    // Soft invariant: forced entries without content are warnings only
    diag.print_warnings();

    if json {
        println!("{}", serde_json::to_string_pretty(&nav)?);
    } else {
        print_nav(&config.sidebar.title, &nav);
    }

    Ok(())
}

fn print_nav(title: &str, items: &[NavItem]) {
    if !title.is_empty() {
        log!("nav"; "{}", title.bold());
    }
    for item in items {
        if item.collapsed {
            println!("{} {}", item.path, "(collapsed)".dimmed());
        } else {
            println!("{}", item.path);
        }
    }
}
