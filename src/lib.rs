// hybris-context - Project recognition and service URL resolution for hybris workspaces
//
// This is the library crate containing the resolution engine and its data model.
// The binary crate (main.rs) prints the derived facts for a workspace configuration.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod provider;
pub mod services;

// Re-export commonly used types for convenience
pub use crate::config::{ConfigManager, FileSettingsProvider};
pub use error::{ContextError, Result};
pub use models::{
    ConnectionType, RemoteConnectionSettings, SettingsSnapshot, Unit, UnitKind, WorkspaceConfig,
    WorkspaceHandle,
};
pub use provider::{ItemsFileValidation, NotificationSink, SettingsProvider, UnitEnumerator};
pub use services::ProjectContext;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
