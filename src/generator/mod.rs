//! Generated site artifacts.

pub mod manifest;

pub use manifest::write_manifest;
