//! Configuration section definitions.
//!
//! Each module corresponds to a section in `dokkit.toml`:
//!
//! | Module     | TOML Section   | Purpose                               |
//! |------------|----------------|---------------------------------------|
//! | `build`    | `[build]`      | Site URL, path prefix, analytics      |
//! | `header`   | `[header]`     | Header bar, links, search credentials |
//! | `sidebar`  | `[sidebar]`    | Nav ordering and display flags        |
//! | `metadata` | `[metadata]`   | Head tags and social previews         |
//! | `pwa`      | `[pwa]`        | Web-app manifest                      |

mod build;
mod header;
mod metadata;
mod pwa;
mod sidebar;

// Re-export section configs
pub use build::BuildConfig;
pub use header::{HeaderConfig, HeaderLink, SearchConfig};
pub use metadata::MetadataConfig;
pub use pwa::{CrossOrigin, DisplayMode, ManifestConfig, ManifestIcon, PwaConfig};
pub use sidebar::{SidebarConfig, SidebarLink};
