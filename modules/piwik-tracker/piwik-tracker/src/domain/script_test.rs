#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::super::script::*;
    use piwik_tracker_sdk::{PiwikSettings, RequestScheme};

    const SAME_HOST_EXPR: &str = r#"var u=(("https:" == document.location.protocol) ? "https" : "http") + "://example.com/";"#;
    const PAGE_HOST_EXPR: &str = r#"var u=(("https:" == document.location.protocol) ? "https" : "http") + "://" + document.location.host + "/";"#;

    fn settings(
        site_id: i32,
        url_http: Option<&str>,
        url_https: Option<&str>,
        base_path: Option<&str>,
    ) -> PiwikSettings {
        PiwikSettings {
            site_id,
            url_http: url_http.map(str::to_owned),
            url_https: url_https.map(str::to_owned),
            base_path: base_path.map(str::to_owned),
        }
    }

    #[test]
    fn zero_site_id_renders_placeholder_only() {
        let variants = [
            settings(0, None, None, None),
            settings(0, Some("a.com"), Some("b.com"), Some("stats")),
            settings(0, Some("a.com"), None, None),
        ];

        for s in &variants {
            for scheme in [RequestScheme::Http, RequestScheme::Https] {
                assert_eq!(generate(s, scheme), "<!-- Piwik disabled: no site id -->");
            }
        }
    }

    #[test]
    fn host_fallback_is_symmetric() {
        assert_eq!(
            with_host_fallback(Some("a.com".to_owned()), None),
            (Some("a.com".to_owned()), Some("a.com".to_owned()))
        );
        assert_eq!(
            with_host_fallback(None, Some("b.com".to_owned())),
            (Some("b.com".to_owned()), Some("b.com".to_owned()))
        );
        assert_eq!(with_host_fallback(None, None), (None, None));
    }

    #[test]
    fn host_fallback_is_idempotent() {
        let once = with_host_fallback(None, Some("b.com".to_owned()));
        let twice = with_host_fallback(once.0.clone(), once.1.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn host_fallback_keeps_distinct_hosts() {
        assert_eq!(
            with_host_fallback(Some("a.com".to_owned()), Some("b.com".to_owned())),
            (Some("a.com".to_owned()), Some("b.com".to_owned()))
        );
    }

    #[test]
    fn base_path_gets_exactly_one_trailing_slash() {
        assert_eq!(normalize_base_path(Some("stats")), "stats/");
        assert_eq!(normalize_base_path(Some("path/to/piwik")), "path/to/piwik/");
        assert_eq!(normalize_base_path(Some("")), "");
        assert_eq!(normalize_base_path(None), "");
    }

    #[test]
    fn no_hosts_falls_back_to_page_host() {
        for scheme in [RequestScheme::Http, RequestScheme::Https] {
            let urls = TrackerUrls::new(&settings(3, None, None, None), scheme);
            assert_eq!(urls.image_base, "/");
            assert_eq!(urls.protocol_expr, PAGE_HOST_EXPR);
        }
    }

    #[test]
    fn no_hosts_snippet_uses_site_relative_image() {
        let out = generate(&settings(3, None, None, Some("piwik")), RequestScheme::Https);
        assert!(out.contains(PAGE_HOST_EXPR));
        assert!(out.contains(r#"<img src="/piwik/piwik.php?idsite=3&amp;rec=1""#));
    }

    // Scenario B
    #[test]
    fn same_host_secure_request() {
        let s = settings(5, Some("example.com"), Some("example.com"), None);
        let urls = TrackerUrls::new(&s, RequestScheme::Https);

        assert_eq!(urls.image_base, "https://example.com/");
        assert_eq!(urls.protocol_expr, SAME_HOST_EXPR);
        assert_eq!(urls.base_path, "");

        let out = generate(&s, RequestScheme::Https);
        assert!(out.contains(r#"_paq.push(["setTrackerUrl", u+"piwik.php"]);"#));
        assert!(out.contains(r#"g.src=u+"piwik.js";"#));
        assert!(out.contains(r#"_paq.push(["setSiteId", "5"]);"#));
        assert!(out.contains(
            r#"<img src="https://example.com/piwik.php?idsite=5&amp;rec=1" style="border:0" alt="" />"#
        ));
    }

    // Scenario C
    #[test]
    fn distinct_hosts_insecure_request_with_base_path() {
        let s = settings(7, Some("a.com"), Some("b.com"), Some("stats"));
        let out = generate(&s, RequestScheme::Http);

        let expected = r#"<!-- Piwik -->
<script type="text/javascript">
  var _paq = _paq || [];
  _paq.push(["trackPageView"]);
  _paq.push(["enableLinkTracking"]);

  (function() {
    var u=(("https:" == document.location.protocol) ? "https://b.com/" : "http://a.com/");
    _paq.push(["setTrackerUrl", u+"stats/piwik.php"]);
    _paq.push(["setSiteId", "7"]);
    var d=document, g=d.createElement("script"), s=d.getElementsByTagName("script")[0]; g.type="text/javascript";
    g.defer=true; g.async=true; g.src=u+"stats/piwik.js"; s.parentNode.insertBefore(g,s);
  })();
</script>
<noscript>
<!-- Piwik Image Tracker -->
<img src="http://a.com/stats/piwik.php?idsite=7&amp;rec=1" style="border:0" alt="" />
</noscript>
<!-- End Piwik Code -->"#;

        assert_eq!(out, expected);
    }

    #[test]
    fn distinct_hosts_secure_request_uses_https_host_for_image() {
        let s = settings(7, Some("a.com"), Some("b.com"), None);
        let urls = TrackerUrls::new(&s, RequestScheme::Https);
        assert_eq!(urls.image_base, "https://b.com/");
    }

    // Scenario E
    #[test]
    fn only_https_host_insecure_request() {
        let s = settings(11, None, Some("secure.example.com:8443"), None);
        let urls = TrackerUrls::new(&s, RequestScheme::Http);

        assert_eq!(urls.image_base, "http://secure.example.com:8443/");
        assert_eq!(
            urls.protocol_expr,
            r#"var u=(("https:" == document.location.protocol) ? "https" : "http") + "://secure.example.com:8443/";"#
        );
    }

    #[test]
    fn only_http_host_secure_request() {
        let s = settings(2, Some("plain.example.com"), None, None);
        let urls = TrackerUrls::new(&s, RequestScheme::Https);
        assert_eq!(urls.image_base, "https://plain.example.com/");
    }

    #[test]
    fn every_endpoint_carries_base_path_once() {
        let out = generate(
            &settings(4, Some("a.com"), None, Some("analytics")),
            RequestScheme::Http,
        );
        assert_eq!(out.matches("analytics/piwik.").count(), 3);
        assert!(!out.contains("analytics//"));
    }

    #[test]
    fn empty_base_path_adds_no_slash() {
        let out = generate(&settings(4, Some("a.com"), None, Some("")), RequestScheme::Http);
        assert!(out.contains(r#"<img src="http://a.com/piwik.php?idsite=4&amp;rec=1""#));
        assert!(!out.contains("//piwik."));
    }

    #[test]
    fn negative_site_id_is_rendered_verbatim() {
        let out = generate(&settings(-3, Some("a.com"), None, None), RequestScheme::Http);
        assert!(out.contains(r#"_paq.push(["setSiteId", "-3"]);"#));
        assert!(out.contains("idsite=-3&amp;rec=1"));
    }

    #[test]
    fn generation_is_deterministic_and_does_not_touch_settings() {
        let s = settings(9, None, Some("b.com"), Some("p"));
        let before = s.clone();

        let first = generate(&s, RequestScheme::Http);
        let second = generate(&s, RequestScheme::Http);

        assert_eq!(first, second);
        assert_eq!(s, before);
    }

    #[test]
    fn snippet_is_wrapped_in_marker_comments() {
        let out = generate(&settings(1, Some("a.com"), None, None), RequestScheme::Http);
        assert!(out.starts_with("<!-- Piwik -->\n"));
        assert!(out.ends_with("\n<!-- End Piwik Code -->"));
    }
}
