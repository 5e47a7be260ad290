// Collaborator contracts
//
// The resolution engine never reaches for "the active instance" of anything.
// Hosts implement these traits and hand them in.

use crate::models::{RemoteConnectionSettings, SettingsSnapshot, Unit, WorkspaceHandle};
use camino::Utf8Path;

/// Supplies settings for a workspace. Values are read fresh on every call.
pub trait SettingsProvider {
    /// Project-level settings recorded at import time.
    fn project_settings(&self, workspace: &WorkspaceHandle) -> SettingsSnapshot;

    /// The application server connection profile currently selected by the developer.
    fn active_hybris_connection(&self, workspace: &WorkspaceHandle) -> RemoteConnectionSettings;

    /// The Solr connection profile currently selected by the developer.
    fn active_solr_connection(&self, workspace: &WorkspaceHandle) -> RemoteConnectionSettings;
}

/// Lists the units of a workspace in a stable order.
pub trait UnitEnumerator {
    fn list_units(&self, workspace: &WorkspaceHandle) -> Vec<Unit>;
}

/// Displays warnings. The engine only decides whether one is needed.
pub trait NotificationSink {
    fn show_warning_message(&self, message: &str);
}

/// Decides whether a single `items.xml` file is out of date.
pub trait ItemsFileValidation {
    fn is_file_out_of_date(&self, file: &Utf8Path) -> bool;
}
