//! Host-facing traits of the piwik tracker plugin.
//!
//! The page-rendering host owns the request and the site configuration; the
//! plugin receives both explicitly on every render and keeps no state between
//! renders.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::ConfigStoreError;
use crate::models::{RenderOutcome, RequestScheme, ViewData};

/// Read-only access to the custom fields configured for the current site.
pub trait SiteConfigStore {
    /// Raw value of the custom field `key`, or `None` if the site does not define it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigStoreError`] if the backing store cannot be read.
    fn custom_field(&self, key: &str) -> Result<Option<String>, ConfigStoreError>;
}

impl<S: BuildHasher> SiteConfigStore for HashMap<String, String, S> {
    fn custom_field(&self, key: &str) -> Result<Option<String>, ConfigStoreError> {
        Ok(self.get(key).cloned())
    }
}

impl SiteConfigStore for BTreeMap<String, String> {
    fn custom_field(&self, key: &str) -> Result<Option<String>, ConfigStoreError> {
        Ok(self.get(key).cloned())
    }
}

/// A plugin invoked by the page-rendering pipeline once per page render.
///
/// ```ignore
/// let outcome = plugin.render(&site_fields, RequestScheme::from_secure(is_secure));
/// if let Some(markup) = outcome.markup() {
///     page.embed(markup);
/// }
/// ```
///
/// Implementations must never panic or fail the page render: anything that
/// goes wrong is reported as [`RenderOutcome::Omitted`].
pub trait PagePlugin: Send + Sync {
    /// Short, stable plugin name.
    fn name(&self) -> &str;

    /// Human-readable description shown in the host's plugin catalogue.
    fn description(&self) -> &str;

    /// View-data slot [`execute`](Self::execute) writes the markup into.
    fn output_slot(&self) -> &str;

    /// Produce the markup for one page render.
    fn render(&self, site: &dyn SiteConfigStore, scheme: RequestScheme) -> RenderOutcome;

    /// Render and store the markup under [`output_slot`](Self::output_slot).
    ///
    /// On [`RenderOutcome::Omitted`] the view data is left untouched.
    fn execute(&self, site: &dyn SiteConfigStore, scheme: RequestScheme, view_data: &mut ViewData) {
        if let RenderOutcome::Rendered(markup) = self.render(site, scheme) {
            view_data.insert(self.output_slot().to_owned(), markup);
        }
    }
}
