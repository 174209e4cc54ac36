//! Piwik snippet preview
//!
//! Renders the markup the piwik page plugin would embed for a site, without
//! running the page-rendering host.
//!
//! # Usage
//!
//! ```bash
//! # Markup for a plain HTTP request
//! piwik-snippet --config site.yaml
//!
//! # Markup for an HTTPS request
//! piwik-snippet --config site.yaml --secure
//!
//! # Show the resolved settings instead of the markup
//! piwik-snippet --config site.yaml --print-settings
//!
//! # Override a site field from the environment
//! PIWIK_SNIPPET__SITE__PIWIK_SITEID=7 piwik-snippet --config site.yaml
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use piwik_tracker::PiwikPlugin;
use piwik_tracker::domain::resolve;
use piwik_tracker_sdk::{PagePlugin, RenderOutcome, RequestScheme};
use tracing_subscriber::EnvFilter;

use crate::config::SnippetConfig;

/// Preview the Piwik tracking markup for a site configuration
#[derive(Parser, Debug)]
#[command(name = "piwik-snippet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML file with `site` custom fields and optional `plugin` settings
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Render for an HTTPS request
    #[arg(long)]
    secure: bool,

    /// Print the resolved settings as JSON instead of the markup
    #[arg(long)]
    print_settings: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = SnippetConfig::load(cli.config.as_deref())?;
    let fields = cfg.site_fields();
    tracing::info!(fields = fields.len(), "Loaded site custom fields");

    if cli.print_settings {
        let settings = resolve(&fields).context("failed to resolve piwik settings")?;
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(ExitCode::SUCCESS);
    }

    let plugin = PiwikPlugin::new(cfg.plugin);
    match plugin.render(&fields, RequestScheme::from_secure(cli.secure)) {
        RenderOutcome::Rendered(markup) => {
            println!("{markup}");
            Ok(ExitCode::SUCCESS)
        }
        RenderOutcome::Omitted { reason } => {
            eprintln!("Tracking output omitted: {reason}");
            Ok(ExitCode::FAILURE)
        }
    }
}
