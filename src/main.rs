//! Dokkit - configuration toolkit for gitbook-style docs sites.

#![allow(dead_code)]

mod cli;
mod config;
mod generator;
mod logger;
mod nav;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { dry } => cli::init::init_config(&config, *dry),
        Commands::Check => cli::check::check_config(&config),
        Commands::Show {
            json,
            pretty,
            reveal_secrets,
        } => cli::show::show_config(&config, *json, *pretty, *reveal_secrets),
        Commands::Manifest { out } => cli::manifest::emit_manifest(&config, out),
        Commands::Nav { content, json } => cli::nav::run_nav(&config, content, *json),
    }
}
