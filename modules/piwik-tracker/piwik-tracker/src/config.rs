//! Configuration for the piwik tracker plugin.
//!
//! This is the plugin's own configuration, supplied once by the host. The
//! per-site tracker settings (site id, hosts, base path) are not part of it;
//! they are read from the site's custom fields on every render.

use serde::Deserialize;

/// View-data slot the rendered markup is stored under unless configured otherwise.
pub const DEFAULT_OUTPUT_SLOT: &str = "Piwik";

/// Error loading the plugin configuration section.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid config for plugin '{plugin}': {source}")]
    InvalidConfig {
        plugin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PiwikTrackerConfig {
    /// View-data slot the page template reads the tracking markup from.
    pub output_slot: String,
}

impl Default for PiwikTrackerConfig {
    fn default() -> Self {
        Self {
            output_slot: DEFAULT_OUTPUT_SLOT.to_owned(),
        }
    }
}

impl PiwikTrackerConfig {
    /// Lenient loader for the plugin's section of the host configuration.
    ///
    /// The section has the shape `{ "config": { ... } }`:
    /// - no section, a non-object section, or no `config` field -> defaults
    /// - a `config` field that does not deserialize -> [`ConfigError::InvalidConfig`]
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidConfig`] if the `config` field exists but is invalid.
    pub fn from_module_section(section: Option<&serde_json::Value>) -> Result<Self, ConfigError> {
        let Some(obj) = section.and_then(serde_json::Value::as_object) else {
            return Ok(Self::default());
        };

        let Some(config_section) = obj.get("config") else {
            return Ok(Self::default());
        };

        Self::deserialize(config_section).map_err(|e| ConfigError::InvalidConfig {
            plugin: crate::PLUGIN_NAME.to_owned(),
            source: e,
        })
    }
}
