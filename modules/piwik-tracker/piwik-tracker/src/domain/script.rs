//! Piwik tracking snippet generation.
//!
//! Pure string formatting: the same settings and scheme always yield the same markup.

use piwik_tracker_sdk::{PiwikSettings, RequestScheme};
use tracing::debug;

/// Markup returned when the site has no (or a zero) site id.
pub const DISABLED_PLACEHOLDER: &str = "<!-- Piwik disabled: no site id -->";

/// Normalized inputs of the snippet template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrackerUrls {
    /// Empty, or the base path with exactly one trailing `/` appended.
    pub(crate) base_path: String,
    /// Server-side base URL used by the `<noscript>` image tracker.
    pub(crate) image_base: String,
    /// Client-side statement assigning the tracker base URL to `u`.
    pub(crate) protocol_expr: String,
}

impl TrackerUrls {
    pub(crate) fn new(settings: &PiwikSettings, scheme: RequestScheme) -> Self {
        let (http_host, https_host) =
            with_host_fallback(settings.url_http.clone(), settings.url_https.clone());
        let base_path = normalize_base_path(settings.base_path.as_deref());

        let mut image_base = match scheme {
            RequestScheme::Https => format!("https://{}/", https_host.as_deref().unwrap_or_default()),
            RequestScheme::Http => format!("http://{}/", http_host.as_deref().unwrap_or_default()),
        };

        // `u` follows the browser's protocol, not `scheme`.
        let protocol_expr = match (http_host.as_deref(), https_host.as_deref()) {
            (Some(http), Some(https)) if http == https => format!(
                r#"var u=(("https:" == document.location.protocol) ? "https" : "http") + "://{http}/";"#
            ),
            (Some(http), Some(https)) => format!(
                r#"var u=(("https:" == document.location.protocol) ? "https://{https}/" : "http://{http}/");"#
            ),
            _ => {
                image_base = "/".to_owned();
                r#"var u=(("https:" == document.location.protocol) ? "https" : "http") + "://" + document.location.host + "/";"#
                    .to_owned()
            }
        };

        Self {
            base_path,
            image_base,
            protocol_expr,
        }
    }
}

/// Fill a missing host from the other one.
pub(crate) fn with_host_fallback(
    http: Option<String>,
    https: Option<String>,
) -> (Option<String>, Option<String>) {
    let https = https.or_else(|| http.clone());
    let http = http.or_else(|| https.clone());
    (http, https)
}

pub(crate) fn normalize_base_path(base_path: Option<&str>) -> String {
    match base_path {
        Some(path) if !path.is_empty() => format!("{path}/"),
        _ => String::new(),
    }
}

/// Render the tracking markup for one page view.
///
/// Returns [`DISABLED_PLACEHOLDER`] when `settings.site_id` is `0`.
#[must_use]
pub fn generate(settings: &PiwikSettings, scheme: RequestScheme) -> String {
    if !settings.is_enabled() {
        debug!("Piwik disabled: no site id configured");
        return DISABLED_PLACEHOLDER.to_owned();
    }

    let urls = TrackerUrls::new(settings, scheme);
    render_snippet(settings.site_id, &urls)
}

fn render_snippet(site_id: i32, urls: &TrackerUrls) -> String {
    let TrackerUrls {
        base_path,
        image_base,
        protocol_expr,
    } = urls;

    format!(
        r#"<!-- Piwik -->
<script type="text/javascript">
  var _paq = _paq || [];
  _paq.push(["trackPageView"]);
  _paq.push(["enableLinkTracking"]);

  (function() {{
    {protocol_expr}
    _paq.push(["setTrackerUrl", u+"{base_path}piwik.php"]);
    _paq.push(["setSiteId", "{site_id}"]);
    var d=document, g=d.createElement("script"), s=d.getElementsByTagName("script")[0]; g.type="text/javascript";
    g.defer=true; g.async=true; g.src=u+"{base_path}piwik.js"; s.parentNode.insertBefore(g,s);
  }})();
</script>
<noscript>
<!-- Piwik Image Tracker -->
<img src="{image_base}{base_path}piwik.php?idsite={site_id}&amp;rec=1" style="border:0" alt="" />
</noscript>
<!-- End Piwik Code -->"#
    )
}
