use serde::{Deserialize, Serialize};

/// Project settings as recorded when the workspace was imported.
///
/// Every field may be absent independently of the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    #[serde(default)]
    pub hybris_directory: Option<String>,

    #[serde(default)]
    pub custom_directory: Option<String>,

    #[serde(default)]
    pub config_directory: Option<String>,

    #[serde(default)]
    pub imported_by_version: Option<String>,

    #[serde(default)]
    pub hybris_project: bool,
}

/// Which remote service a connection profile points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    #[default]
    Hybris,
    Solr,
}

/// A saved remote connection profile.
///
/// For [`ConnectionType::Hybris`] the web-root is the HAC context path, for
/// [`ConnectionType::Solr`] it is the Solr context path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConnectionSettings {
    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "type")]
    pub connection_type: ConnectionType,

    #[serde(default)]
    pub host_ip: String,

    #[serde(default)]
    pub port: Option<String>,

    #[serde(default)]
    pub webroot: Option<String>,
}

impl RemoteConnectionSettings {
    /// Profile used when no application server connection has been saved.
    pub fn default_hybris() -> Self {
        Self {
            name: "Local".to_string(),
            connection_type: ConnectionType::Hybris,
            host_ip: "localhost".to_string(),
            port: Some("9002".to_string()),
            webroot: Some(String::new()),
        }
    }

    /// Profile used when no Solr connection has been saved.
    pub fn default_solr() -> Self {
        Self {
            name: "Local Solr".to_string(),
            connection_type: ConnectionType::Solr,
            host_ip: "localhost".to_string(),
            port: Some("8983".to_string()),
            webroot: Some("solr".to_string()),
        }
    }

    /// Built-in default profile for the given connection type.
    pub fn default_for(connection_type: ConnectionType) -> Self {
        match connection_type {
            ConnectionType::Hybris => Self::default_hybris(),
            ConnectionType::Solr => Self::default_solr(),
        }
    }

    /// Port with empty text treated as absent.
    pub fn explicit_port(&self) -> Option<&str> {
        self.port.as_deref().filter(|p| !p.is_empty())
    }

    /// Web-root with empty text treated as absent.
    pub fn explicit_webroot(&self) -> Option<&str> {
        self.webroot.as_deref().filter(|w| !w.is_empty())
    }
}
