//! Piwik Tracker Plugin
//!
//! Page plugin that injects the Piwik web analytics tracking snippet into
//! rendered pages. On every render it reads the current site's custom fields,
//! coerces them into [`PiwikSettings`](piwik_tracker_sdk::PiwikSettings) and
//! formats the tracking markup for the request's scheme.
//!
//! ## Site configuration
//!
//! | Custom field     | Kind    | Meaning                                   |
//! |------------------|---------|-------------------------------------------|
//! | `piwik_siteid`   | integer | Piwik site id; `0` or missing disables    |
//! | `piwik_urlhttp`  | text    | Piwik host[:port] for HTTP                |
//! | `piwik_urlhttps` | text    | Piwik host[:port] for HTTPS               |
//! | `piwik_basepath` | text    | Folder of the Piwik installation          |
//!
//! ## Plugin configuration
//!
//! ```yaml
//! modules:
//!   piwik:
//!     config:
//!       output_slot: "Piwik"
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod plugin;

pub use config::{ConfigError, PiwikTrackerConfig};
pub use plugin::PiwikPlugin;

/// Stable plugin name, also the host configuration section name.
pub const PLUGIN_NAME: &str = "piwik";

pub const PLUGIN_DESCRIPTION: &str =
    "Piwik web analytics plugin. See http://www.piwik.org/.";
