// Well-known names and defaults of a hybris installation.

/// File holding developer overrides inside the config directory.
pub const LOCAL_PROPERTIES: &str = "local.properties";

pub const TOMCAT_HTTP_PORT_KEY: &str = "tomcat.http.port";
pub const TOMCAT_SSL_PORT_KEY: &str = "tomcat.ssl.port";
pub const HAC_WEBROOT_KEY: &str = "hac.webroot";

pub const DEFAULT_TOMCAT_HTTP_PORT: &str = "9001";
pub const DEFAULT_TOMCAT_SSL_PORT: &str = "9002";

/// Standard HTTP port. A connection on it is always plain HTTP.
pub const STANDARD_HTTP_PORT: &str = "80";

pub const HTTP_PROTOCOL: &str = "http://";
pub const HTTPS_PROTOCOL: &str = "https://";
pub const URL_PORT_DELIMITER: &str = ":";

/// Versions below `9.0` (encoded as `major * 100 + minor`) are outdated.
pub const MINIMUM_SUPPORTED_VERSION_SCORE: i64 = 900;

/// Unit name pattern groups that identify a hybris workspace.
///
/// A workspace is plausible when every pattern of at least one group matches
/// one of its unit names. Groups are tried in order.
pub const HYBRIS_UNIT_PATTERN_GROUPS: &[&[&str]] = &[
    // Accelerator storefront
    &["*cockpits", "*core", "*facades", "*storefront"],
    // Platform with hMC
    &["*hmc", "hmc", "platform"],
];

pub const ITEMS_VALIDATION_WARNING: &str =
    "Some items.xml files are newer than the last build. Rebuild the platform to keep the type system in sync.";

pub const OUTDATED_IMPORT_WARNING: &str =
    "The project was imported by an outdated plugin version. Re-import it to refresh the settings.";
