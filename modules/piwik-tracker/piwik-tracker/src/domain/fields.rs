//! Static mapping from [`PiwikSettings`] fields to site custom-field keys.

use piwik_tracker_sdk::PiwikSettings;

use super::error::CoercionError;

/// Fields of [`PiwikSettings`] that are populated from the site configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    SiteId,
    UrlHttp,
    UrlHttps,
    BasePath,
}

/// Type a raw custom-field value is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
}

/// A coerced custom-field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(i32),
    Text(Option<String>),
}

/// One row of the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigField {
    pub field: SettingsField,
    pub key: &'static str,
    pub kind: FieldKind,
}

pub const SITE_ID_KEY: &str = "piwik_siteid";
pub const URL_HTTP_KEY: &str = "piwik_urlhttp";
pub const URL_HTTPS_KEY: &str = "piwik_urlhttps";
pub const BASE_PATH_KEY: &str = "piwik_basepath";

/// Every settings field with its custom-field key and kind, in resolution order.
pub const CONFIG_FIELDS: [ConfigField; 4] = [
    ConfigField {
        field: SettingsField::SiteId,
        key: SITE_ID_KEY,
        kind: FieldKind::Integer,
    },
    ConfigField {
        field: SettingsField::UrlHttp,
        key: URL_HTTP_KEY,
        kind: FieldKind::Text,
    },
    ConfigField {
        field: SettingsField::UrlHttps,
        key: URL_HTTPS_KEY,
        kind: FieldKind::Text,
    },
    ConfigField {
        field: SettingsField::BasePath,
        key: BASE_PATH_KEY,
        kind: FieldKind::Text,
    },
];

impl FieldKind {
    /// Value a field of this kind holds when the site does not configure it.
    #[must_use]
    pub fn default_value(self) -> FieldValue {
        match self {
            Self::Integer => FieldValue::Integer(0),
            Self::Text => FieldValue::Text(None),
        }
    }

    /// Convert a raw custom-field value.
    ///
    /// Surrounding whitespace is ignored. Blank text coerces to an absent value;
    /// integers accept an optional sign and must fit in 32 bits.
    ///
    /// # Errors
    /// Returns [`CoercionError::NotAnInteger`] if an integer field holds anything else.
    pub fn coerce(self, raw: &str) -> Result<FieldValue, CoercionError> {
        let trimmed = raw.trim();
        match self {
            Self::Integer => trimmed
                .parse::<i32>()
                .map(FieldValue::Integer)
                .map_err(|source| CoercionError::NotAnInteger {
                    raw: raw.to_owned(),
                    source,
                }),
            Self::Text if trimmed.is_empty() => Ok(FieldValue::Text(None)),
            Self::Text => Ok(FieldValue::Text(Some(trimmed.to_owned()))),
        }
    }
}

impl SettingsField {
    /// Store `value` into the matching field of `settings`.
    ///
    /// A value of the wrong kind leaves the field unchanged; the table never
    /// produces one.
    pub fn assign(self, settings: &mut PiwikSettings, value: FieldValue) {
        match (self, value) {
            (Self::SiteId, FieldValue::Integer(v)) => settings.site_id = v,
            (Self::UrlHttp, FieldValue::Text(v)) => settings.url_http = v,
            (Self::UrlHttps, FieldValue::Text(v)) => settings.url_https = v,
            (Self::BasePath, FieldValue::Text(v)) => settings.base_path = v,
            (field, value) => {
                tracing::debug!(?field, ?value, "ignoring value of mismatched kind");
            }
        }
    }
}

/// Settings with every table field at its kind's default.
#[must_use]
pub fn default_settings() -> PiwikSettings {
    let mut settings = PiwikSettings::default();
    for entry in &CONFIG_FIELDS {
        entry.field.assign(&mut settings, entry.kind.default_value());
    }
    settings
}
