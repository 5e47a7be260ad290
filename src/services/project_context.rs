//! Project recognition facade.
//!
//! [`ProjectContext`] is the single entry point hosts talk to. It reads fresh
//! settings and units from its collaborators on every call and delegates the
//! decisions to the pure functions of the sibling modules.

use crate::constants::HYBRIS_UNIT_PATTERN_GROUPS;
use crate::models::{RemoteConnectionSettings, SettingsSnapshot, Unit, UnitKind, WorkspaceHandle};
use crate::provider::{SettingsProvider, UnitEnumerator};
use crate::services::local_properties::LocalProperties;
use crate::services::matcher::{WildcardPattern, match_all};
use crate::services::url_resolver::{resolve_app_url, resolve_hac_url, resolve_search_url};
use crate::services::version::is_outdated;
use camino::Utf8Path;

/// Whether a set of unit names looks like a hybris workspace.
///
/// False for an empty set. Otherwise true when every pattern of one of
/// [`HYBRIS_UNIT_PATTERN_GROUPS`] matches, trying groups in order.
pub fn is_plausible_project_by_units<S: AsRef<str>>(unit_names: &[S]) -> bool {
    if unit_names.is_empty() {
        return false;
    }

    HYBRIS_UNIT_PATTERN_GROUPS.iter().any(|group| {
        let patterns: Vec<WildcardPattern> = group.iter().copied().map(WildcardPattern::from).collect();
        match_all(&patterns, unit_names)
    })
}

/// First unit of `kind` in the order given.
pub fn find_unit_of_kind(units: &[Unit], kind: UnitKind) -> Option<&Unit> {
    units.iter().find(|unit| unit.kind == kind)
}

/// Local overrides for the config directory recorded in `snapshot`.
pub fn local_properties_for(snapshot: &SettingsSnapshot) -> Option<LocalProperties> {
    LocalProperties::load(snapshot.config_directory.as_deref().map(Utf8Path::new))
}

/// Answers project questions about workspaces using injected collaborators.
#[derive(Debug, Clone)]
pub struct ProjectContext<P, U> {
    settings: P,
    units: U,
}

impl<P, U> ProjectContext<P, U>
where
    P: SettingsProvider,
    U: UnitEnumerator,
{
    pub fn new(settings: P, units: U) -> Self {
        Self { settings, units }
    }

    pub fn settings_provider(&self) -> &P {
        &self.settings
    }

    pub fn unit_enumerator(&self) -> &U {
        &self.units
    }

    /// The project-kind flag recorded in the project settings.
    pub fn is_hybris_project(&self, workspace: &WorkspaceHandle) -> bool {
        self.settings.project_settings(workspace).hybris_project
    }

    /// Whether the workspace was imported by a version older than 9.0.
    pub fn is_outdated_hybris_project(&self, workspace: &WorkspaceHandle) -> bool {
        let snapshot = self.settings.project_settings(workspace);
        is_outdated(snapshot.imported_by_version.as_deref())
    }

    /// Whether the workspace's unit names look like a hybris project.
    pub fn is_potentially_hybris_project(&self, workspace: &WorkspaceHandle) -> bool {
        let names: Vec<String> = self
            .units
            .list_units(workspace)
            .into_iter()
            .map(|unit| unit.name)
            .collect();
        let plausible = is_plausible_project_by_units(&names);
        tracing::debug!(
            "Workspace {} with {} units potentially hybris: {}",
            workspace,
            names.len(),
            plausible
        );
        plausible
    }

    /// First unit of `kind` among the workspace's units.
    pub fn unit_of_kind(&self, workspace: &WorkspaceHandle, kind: UnitKind) -> Option<Unit> {
        let units = self.units.list_units(workspace);
        find_unit_of_kind(&units, kind).cloned()
    }

    /// The unit holding the hybris platform.
    pub fn platform_unit(&self, workspace: &WorkspaceHandle) -> Option<Unit> {
        self.unit_of_kind(workspace, UnitKind::Platform)
    }

    pub fn hybris_directory(&self, workspace: &WorkspaceHandle) -> Option<String> {
        self.settings.project_settings(workspace).hybris_directory
    }

    pub fn custom_directory(&self, workspace: &WorkspaceHandle) -> Option<String> {
        self.settings.project_settings(workspace).custom_directory
    }

    /// Application server URL, using the active profile unless one is given.
    pub fn host_url(
        &self,
        workspace: &WorkspaceHandle,
        settings: Option<&RemoteConnectionSettings>,
    ) -> String {
        let settings = self.hybris_connection(workspace, settings);
        let local_properties = local_properties_for(&self.settings.project_settings(workspace));
        resolve_app_url(&settings, local_properties.as_ref())
    }

    /// HAC URL, using the active profile unless one is given.
    pub fn host_hac_url(
        &self,
        workspace: &WorkspaceHandle,
        settings: Option<&RemoteConnectionSettings>,
    ) -> String {
        let settings = self.hybris_connection(workspace, settings);
        let local_properties = local_properties_for(&self.settings.project_settings(workspace));
        resolve_hac_url(&settings, local_properties.as_ref())
    }

    /// Solr URL, using the active Solr profile unless one is given.
    pub fn host_solr_url(
        &self,
        workspace: &WorkspaceHandle,
        settings: Option<&RemoteConnectionSettings>,
    ) -> String {
        let settings = settings
            .cloned()
            .unwrap_or_else(|| self.settings.active_solr_connection(workspace));
        resolve_search_url(&settings)
    }

    fn hybris_connection(
        &self,
        workspace: &WorkspaceHandle,
        settings: Option<&RemoteConnectionSettings>,
    ) -> RemoteConnectionSettings {
        settings
            .cloned()
            .unwrap_or_else(|| self.settings.active_hybris_connection(workspace))
    }
}
