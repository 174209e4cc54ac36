//! Layered configuration of the snippet preview tool.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use piwik_tracker::PiwikTrackerConfig;
use serde::Deserialize;
use serde_json::Value;

/// Environment prefix, e.g. `PIWIK_SNIPPET__SITE__PIWIK_SITEID=5`.
pub const ENV_PREFIX: &str = "PIWIK_SNIPPET__";

/// Contents of the `--config` file.
///
/// ```yaml
/// site:
///   piwik_siteid: 5
///   piwik_urlhttp: stats.example.com
/// plugin:
///   output_slot: Piwik
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetConfig {
    /// Site custom fields, as the host's configuration store would hold them.
    pub site: BTreeMap<String, Value>,
    /// Plugin configuration.
    pub plugin: PiwikTrackerConfig,
}

impl SnippetConfig {
    /// Merge the YAML file (if any) and `PIWIK_SNIPPET__*` environment variables.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or the merged config is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid snippet configuration")
    }

    /// Site custom fields as raw strings.
    ///
    /// Scalars are stringified the way a host's custom-field store keeps them;
    /// `null` and nested values are dropped.
    #[must_use]
    pub fn site_fields(&self) -> BTreeMap<String, String> {
        self.site
            .iter()
            .filter_map(|(key, value)| {
                let raw = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    Value::Null => return None,
                    Value::Array(_) | Value::Object(_) => {
                        tracing::warn!(key = %key, "Ignoring non-scalar site field");
                        return None;
                    }
                };
                Some((key.clone(), raw))
            })
            .collect()
    }
}
