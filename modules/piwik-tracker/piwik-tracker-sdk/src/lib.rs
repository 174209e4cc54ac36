//! Piwik Tracker SDK
//!
//! This crate provides the host-facing contract of the `piwik-tracker` page plugin:
//!
//! - [`PagePlugin`] - Trait the page-rendering host calls once per render
//! - [`SiteConfigStore`] - Read-only access to the current site's custom fields
//! - [`RequestScheme`] - Transport of the current request (HTTP or HTTPS)
//! - [`RenderOutcome`] - Explicit success/omission result of a render
//! - [`PiwikSettings`] - Typed per-site tracker settings
//! - [`PiwikTrackerError`], [`ConfigStoreError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use piwik_tracker_sdk::{PagePlugin, RequestScheme, ViewData};
//!
//! let mut view_data = ViewData::new();
//! plugin.execute(&site_fields, RequestScheme::from_secure(req.is_secure()), &mut view_data);
//!
//! // The page template embeds `view_data["Piwik"]` verbatim, if present.
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

pub use api::{PagePlugin, SiteConfigStore};
pub use error::{ConfigStoreError, PiwikTrackerError};
pub use models::{PiwikSettings, RenderOutcome, RequestScheme, ViewData};
