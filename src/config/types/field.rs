//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Each section defines a `FIELDS` constant holding its field paths, so
/// diagnostics always name a real field.
///
/// # Example
///
/// ```ignore
/// impl SearchConfig {
///     pub const FIELDS: SearchFields = SearchFields {
///         index_name: FieldPath::new("header.search.index_name"),
///         ..
///     };
/// }
///
/// diag.error(SearchConfig::FIELDS.index_name, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
