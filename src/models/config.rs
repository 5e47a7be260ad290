use crate::models::{ConnectionType, RemoteConnectionSettings, SettingsSnapshot, Unit};
use serde::{Deserialize, Serialize};

/// Workspace configuration from `hybris-context.yaml`.
///
/// Holds what an IDE would keep in its project and developer-specific
/// settings: the project snapshot, the saved connection profiles with the
/// selected one of each type, and the workspace's units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub project: SettingsSnapshot,

    pub hybris_connections: Vec<RemoteConnectionSettings>,

    /// Name of the selected application server profile.
    pub active_hybris_connection: Option<String>,

    pub solr_connections: Vec<RemoteConnectionSettings>,

    /// Name of the selected Solr profile.
    pub active_solr_connection: Option<String>,

    pub units: Vec<Unit>,
}

impl WorkspaceConfig {
    /// The selected application server profile.
    ///
    /// Falls back to the first saved profile, then to the built-in default.
    pub fn active_hybris_connection(&self) -> RemoteConnectionSettings {
        select_connection(
            &self.hybris_connections,
            self.active_hybris_connection.as_deref(),
            ConnectionType::Hybris,
        )
    }

    /// The selected Solr profile, with the same fallbacks.
    pub fn active_solr_connection(&self) -> RemoteConnectionSettings {
        select_connection(
            &self.solr_connections,
            self.active_solr_connection.as_deref(),
            ConnectionType::Solr,
        )
    }
}

fn select_connection(
    profiles: &[RemoteConnectionSettings],
    active: Option<&str>,
    connection_type: ConnectionType,
) -> RemoteConnectionSettings {
    let selected = active
        .and_then(|name| profiles.iter().find(|profile| profile.name == name))
        .or_else(|| profiles.first());

    match selected {
        Some(profile) => RemoteConnectionSettings {
            connection_type,
            ..profile.clone()
        },
        None => RemoteConnectionSettings::default_for(connection_type),
    }
}
