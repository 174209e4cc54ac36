//! Domain models for the piwik tracker plugin.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-render view data the host hands to page plugins.
///
/// Keys are slot names; values are markup fragments the page template embeds verbatim.
pub type ViewData = HashMap<String, String>;

/// Typed tracker settings of a single site.
///
/// Built fresh for every render by the config resolver and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PiwikSettings {
    /// Analytics site id. `0` disables tracking.
    pub site_id: i32,
    /// Host (and optional port) of the analytics server for plain HTTP, e.g. `www.example.com:80`.
    pub url_http: Option<String>,
    /// Host (and optional port) of the analytics server for HTTPS, e.g. `www.example.com:443`.
    pub url_https: Option<String>,
    /// Folder the analytics installation resides in, relative to the host, e.g. `path/to/piwik`.
    pub base_path: Option<String>,
}

impl PiwikSettings {
    /// Whether these settings produce a tracking snippet at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.site_id != 0
    }
}

/// Transport the current request arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestScheme {
    Http,
    Https,
}

impl RequestScheme {
    /// Map the host's "is this request secure" flag to a scheme.
    #[must_use]
    pub fn from_secure(is_secure: bool) -> Self {
        if is_secure { Self::Https } else { Self::Http }
    }

    #[must_use]
    pub fn is_secure(self) -> bool {
        matches!(self, Self::Https)
    }

    /// URL scheme name, without the `://` separator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for RequestScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single plugin render as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Markup to embed into the page (possibly the "disabled" placeholder comment).
    Rendered(String),
    /// Tracking output is skipped for this render; the page renders without it.
    Omitted {
        /// Diagnostic reason, for logs only.
        reason: String,
    },
}

impl RenderOutcome {
    /// The markup, if the render produced any.
    #[must_use]
    pub fn markup(&self) -> Option<&str> {
        match self {
            Self::Rendered(markup) => Some(markup),
            Self::Omitted { .. } => None,
        }
    }

    #[must_use]
    pub fn into_markup(self) -> Option<String> {
        match self {
            Self::Rendered(markup) => Some(markup),
            Self::Omitted { .. } => None,
        }
    }
}
