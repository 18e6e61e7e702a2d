//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod manifest;
pub mod nav;
pub mod show;

pub use args::{Cli, Commands};
