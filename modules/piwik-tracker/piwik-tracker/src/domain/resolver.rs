//! Resolves typed [`PiwikSettings`] from a site's custom fields.

use piwik_tracker_sdk::{PiwikSettings, PiwikTrackerError, SiteConfigStore};
use tracing::{debug, warn};

use super::fields::{CONFIG_FIELDS, default_settings};

/// Read every field of the table from `store` and coerce it to its kind.
///
/// Missing keys keep their default. A value that fails coercion is reported
/// with a warning and also keeps its default; the remaining fields are still
/// resolved.
///
/// # Errors
/// Returns [`PiwikTrackerError::ConfigStore`] if the store itself fails. Plain
/// in-memory maps never do.
pub fn resolve(store: &dyn SiteConfigStore) -> Result<PiwikSettings, PiwikTrackerError> {
    let mut settings = default_settings();

    for entry in &CONFIG_FIELDS {
        let Some(raw) = store.custom_field(entry.key)? else {
            continue;
        };

        match entry.kind.coerce(&raw) {
            Ok(value) => entry.field.assign(&mut settings, value),
            Err(e) => {
                warn!(key = entry.key, error = %e, "Failed to read setting, using default");
            }
        }
    }

    debug!(
        site_id = settings.site_id,
        url_http = ?settings.url_http,
        url_https = ?settings.url_https,
        base_path = ?settings.base_path,
        "Resolved piwik settings"
    );

    Ok(settings)
}
