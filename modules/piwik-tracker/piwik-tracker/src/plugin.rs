//! Page plugin wiring the resolver and the snippet generator together.

use piwik_tracker_sdk::{
    PagePlugin, PiwikTrackerError, RenderOutcome, RequestScheme, SiteConfigStore,
};
use tracing::instrument;

use crate::config::PiwikTrackerConfig;
use crate::domain::{generate, resolve};
use crate::{PLUGIN_DESCRIPTION, PLUGIN_NAME};

/// Piwik web analytics page plugin.
///
/// Holds only its immutable plugin configuration; every render reads the
/// site's custom fields afresh.
#[derive(Debug, Clone, Default)]
pub struct PiwikPlugin {
    config: PiwikTrackerConfig,
}

impl PiwikPlugin {
    #[must_use]
    pub fn new(config: PiwikTrackerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PiwikTrackerConfig {
        &self.config
    }

    /// Resolve the site's settings and render the tracking markup.
    ///
    /// # Errors
    /// Returns [`PiwikTrackerError`] if the site configuration cannot be read.
    pub fn tracking_script(
        &self,
        site: &dyn SiteConfigStore,
        scheme: RequestScheme,
    ) -> Result<String, PiwikTrackerError> {
        let settings = resolve(site)?;
        Ok(generate(&settings, scheme))
    }
}

fn log_and_omit(op: &str, e: &PiwikTrackerError) -> RenderOutcome {
    tracing::error!(operation = op, error = ?e, "piwik tracking output omitted");
    RenderOutcome::Omitted {
        reason: e.to_string(),
    }
}

impl PagePlugin for PiwikPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn description(&self) -> &str {
        PLUGIN_DESCRIPTION
    }

    fn output_slot(&self) -> &str {
        &self.config.output_slot
    }

    #[instrument(skip_all, fields(plugin = PLUGIN_NAME, scheme = %scheme))]
    fn render(&self, site: &dyn SiteConfigStore, scheme: RequestScheme) -> RenderOutcome {
        match self.tracking_script(site, scheme) {
            Ok(markup) => RenderOutcome::Rendered(markup),
            Err(e) => log_and_omit("render", &e),
        }
    }
}
