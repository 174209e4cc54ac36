//! Error types for the piwik tracker plugin.

use thiserror::Error;

/// Failure reported by a [`SiteConfigStore`](crate::SiteConfigStore) implementation.
#[derive(Debug, Clone, Error)]
#[error("site config store failed reading '{key}': {message}")]
pub struct ConfigStoreError {
    /// The custom-field key being read.
    pub key: String,
    /// Store-specific description of the failure.
    pub message: String,
}

impl ConfigStoreError {
    /// Create a store error for the given key.
    #[must_use]
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Errors that can occur while producing the tracking markup.
///
/// None of these reach the end user: the plugin boundary converts them into
/// [`RenderOutcome::Omitted`](crate::RenderOutcome::Omitted).
#[derive(Debug, Error)]
pub enum PiwikTrackerError {
    /// The site configuration store could not be read.
    #[error("site configuration unavailable")]
    ConfigStore(#[from] ConfigStoreError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
