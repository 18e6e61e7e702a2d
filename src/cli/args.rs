//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Dokkit docs-site configuration toolkit CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: dokkit.toml)
    #[arg(short = 'C', long, global = true, default_value = "dokkit.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override site URL.
    ///
    /// Useful for CI/CD deployments where the production URL differs from the
    /// committed config. The path component is extracted as `path_prefix`
    /// when none is set.
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// True for the init command (config file may not exist yet).
    pub fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter dokkit.toml
    #[command(visible_alias = "i")]
    Init {
        /// Print the config template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the configuration
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved configuration
    Show {
        /// Output JSON instead of TOML
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Include search credentials in the output
        #[arg(long)]
        reveal_secrets: bool,
    },

    /// Emit the web-app manifest (or retract it when PWA is disabled)
    Manifest {
        /// Output directory
        #[arg(short, long, default_value = "public", value_hint = clap::ValueHint::DirPath)]
        out: PathBuf,
    },

    /// Resolve the sidebar navigation order from the content tree
    Nav {
        /// Content directory (relative to project root)
        #[arg(short, long, default_value = "content", value_hint = clap::ValueHint::DirPath)]
        content: PathBuf,

        /// Output the resolved order as JSON
        #[arg(short, long)]
        json: bool,
    },
}
