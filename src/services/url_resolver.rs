//! Service URL assembly from connection profiles and local overrides.
//!
//! The application server and HAC resolvers fall back to `local.properties`
//! and built-in Tomcat defaults. The Solr resolver takes its profile at face
//! value.

use crate::constants::{
    DEFAULT_TOMCAT_HTTP_PORT, DEFAULT_TOMCAT_SSL_PORT, HAC_WEBROOT_KEY, HTTPS_PROTOCOL,
    HTTP_PROTOCOL, STANDARD_HTTP_PORT, TOMCAT_HTTP_PORT_KEY, TOMCAT_SSL_PORT_KEY,
    URL_PORT_DELIMITER,
};
use crate::models::RemoteConnectionSettings;
use crate::services::local_properties::LocalProperties;

/// `protocol://host:port` of the application server.
///
/// An empty port falls back to `tomcat.ssl.port`, then to `9002`. The URL is
/// plain HTTP when the resolved port is the configured Tomcat HTTP port or
/// port 80, HTTPS otherwise.
pub fn resolve_app_url(
    settings: &RemoteConnectionSettings,
    local_properties: Option<&LocalProperties>,
) -> String {
    let ssl_port = local_property(local_properties, TOMCAT_SSL_PORT_KEY, DEFAULT_TOMCAT_SSL_PORT);
    let http_port =
        local_property(local_properties, TOMCAT_HTTP_PORT_KEY, DEFAULT_TOMCAT_HTTP_PORT);

    let port = settings.explicit_port().unwrap_or(ssl_port);
    let protocol = if port == http_port || port == STANDARD_HTTP_PORT {
        HTTP_PROTOCOL
    } else {
        HTTPS_PROTOCOL
    };

    let url = format!("{protocol}{}{URL_PORT_DELIMITER}{port}", settings.host_ip);
    tracing::debug!("Calculated host URL={}", url);
    url
}

/// Application server URL followed by the HAC web-root.
///
/// The profile's web-root wins. An empty one falls back to `hac.webroot`
/// when local properties exist; without them an empty web-root is kept and
/// only a missing one drops the suffix. Surrounding slashes and spaces are
/// stripped, so a web-root of `/` or `""` yields a bare trailing slash (HAC on
/// the root context).
pub fn resolve_hac_url(
    settings: &RemoteConnectionSettings,
    local_properties: Option<&LocalProperties>,
) -> String {
    let mut url = resolve_app_url(settings, local_properties);

    let webroot = match (settings.explicit_webroot(), local_properties) {
        (Some(webroot), _) => Some(webroot),
        (None, Some(props)) => props.get(HAC_WEBROOT_KEY),
        (None, None) => settings.webroot.as_deref(),
    };

    if let Some(webroot) = webroot {
        url.push('/');
        url.push_str(strip_webroot(webroot));
    }

    tracing::debug!("Calculated hostHacURL={}", url);
    url
}

/// `https://host:port/webroot` of the Solr server.
///
/// No defaults are applied. Missing fields leave visible gaps in the URL.
pub fn resolve_search_url(settings: &RemoteConnectionSettings) -> String {
    let url = format!(
        "{HTTPS_PROTOCOL}{}{URL_PORT_DELIMITER}{}/{}",
        settings.host_ip,
        settings.port.as_deref().unwrap_or_default(),
        settings.webroot.as_deref().unwrap_or_default(),
    );
    tracing::debug!("Calculated host SOLR URL={}", url);
    url
}

fn local_property<'a>(
    local_properties: Option<&'a LocalProperties>,
    key: &str,
    default: &'a str,
) -> &'a str {
    local_properties.map_or(default, |props| props.get_or(key, default))
}

fn strip_webroot(webroot: &str) -> &str {
    webroot.trim_matches(|c: char| c == '/' || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConnectionType;

    fn hybris(host: &str, port: Option<&str>, webroot: Option<&str>) -> RemoteConnectionSettings {
        RemoteConnectionSettings {
            name: "test".to_string(),
            connection_type: ConnectionType::Hybris,
            host_ip: host.to_string(),
            port: port.map(str::to_string),
            webroot: webroot.map(str::to_string),
        }
    }

    fn props(pairs: &[(&str, &str)]) -> LocalProperties {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_empty_port_uses_default_ssl_port() {
        let url = resolve_app_url(&hybris("localhost", Some(""), None), None);
        assert_eq!(url, "https://localhost:9002");

        let url = resolve_app_url(&hybris("localhost", None, None), None);
        assert_eq!(url, "https://localhost:9002");
    }

    #[test]
    fn test_empty_port_uses_local_ssl_port() {
        let local = props(&[("tomcat.ssl.port", "8443")]);
        let url = resolve_app_url(&hybris("10.0.0.5", Some(""), None), Some(&local));
        assert_eq!(url, "https://10.0.0.5:8443");
    }

    #[test]
    fn test_default_http_port_selects_http() {
        let url = resolve_app_url(&hybris("localhost", Some("9001"), None), None);
        assert_eq!(url, "http://localhost:9001");
    }

    #[test]
    fn test_configured_http_port_selects_http() {
        let local = props(&[("tomcat.http.port", "8080")]);
        assert_eq!(
            resolve_app_url(&hybris("localhost", Some("8080"), None), Some(&local)),
            "http://localhost:8080"
        );
        // 9001 is no longer the HTTP port once overridden.
        assert_eq!(
            resolve_app_url(&hybris("localhost", Some("9001"), None), Some(&local)),
            "https://localhost:9001"
        );
    }

    #[test]
    fn test_port_80_is_always_http() {
        let local = props(&[("tomcat.http.port", "8080")]);
        assert_eq!(
            resolve_app_url(&hybris("shop.example.com", Some("80"), None), Some(&local)),
            "http://shop.example.com:80"
        );
    }

    #[test]
    fn test_protocol_follows_resolved_port() {
        // SSL port fallback equal to the HTTP port still yields http.
        let local = props(&[("tomcat.ssl.port", "9001")]);
        assert_eq!(
            resolve_app_url(&hybris("localhost", Some(""), None), Some(&local)),
            "http://localhost:9001"
        );
    }

    #[test]
    fn test_hac_webroot_is_stripped() {
        let url = resolve_hac_url(&hybris("localhost", Some("9002"), Some(" /hac/ ")), None);
        assert_eq!(url, "https://localhost:9002/hac");
    }

    #[test]
    fn test_hac_root_context() {
        let url = resolve_hac_url(&hybris("localhost", Some("9002"), Some("/")), None);
        assert_eq!(url, "https://localhost:9002/");
    }

    #[test]
    fn test_hac_falls_back_to_local_webroot() {
        let local = props(&[("hac.webroot", "/admin")]);
        let url = resolve_hac_url(&hybris("localhost", Some("9002"), Some("")), Some(&local));
        assert_eq!(url, "https://localhost:9002/admin");
    }

    #[test]
    fn test_hac_empty_webroot_without_local_properties_keeps_separator() {
        let url = resolve_hac_url(&hybris("localhost", Some("9002"), Some("")), None);
        assert_eq!(url, "https://localhost:9002/");

        let url = resolve_hac_url(&RemoteConnectionSettings::default_hybris(), None);
        assert_eq!(url, "https://localhost:9002/");
    }

    #[test]
    fn test_hac_settings_webroot_wins() {
        let local = props(&[("hac.webroot", "/admin")]);
        let url = resolve_hac_url(&hybris("localhost", Some("9002"), Some("hac")), Some(&local));
        assert_eq!(url, "https://localhost:9002/hac");
    }

    #[test]
    fn test_hac_without_any_webroot() {
        let local = props(&[("tomcat.ssl.port", "8443")]);
        assert_eq!(
            resolve_hac_url(&hybris("localhost", Some(""), Some("")), Some(&local)),
            "https://localhost:8443"
        );
        assert_eq!(
            resolve_hac_url(&hybris("localhost", Some("9002"), None), None),
            "https://localhost:9002"
        );
    }

    #[test]
    fn test_search_url_is_literal() {
        let solr = RemoteConnectionSettings::default_solr();
        assert_eq!(resolve_search_url(&solr), "https://localhost:8983/solr");

        let custom = RemoteConnectionSettings {
            name: "solr".to_string(),
            connection_type: ConnectionType::Solr,
            host_ip: "search".to_string(),
            port: Some("80".to_string()),
            webroot: Some("/solr/".to_string()),
        };
        // No protocol inference and no stripping.
        assert_eq!(resolve_search_url(&custom), "https://search:80//solr/");
    }

    #[test]
    fn test_search_url_with_missing_fields() {
        let blank = RemoteConnectionSettings {
            name: String::new(),
            connection_type: ConnectionType::Solr,
            host_ip: String::new(),
            port: None,
            webroot: None,
        };
        assert_eq!(resolve_search_url(&blank), "https://:/");
    }
}
