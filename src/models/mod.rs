//! Data models for hybris-context.
//!
//! - [`SettingsSnapshot`]: project-level settings read at the start of a resolution call
//! - [`RemoteConnectionSettings`]: a saved connection profile for the application server or Solr
//! - [`Unit`] / [`UnitKind`]: the modules a workspace is made of
//! - [`WorkspaceHandle`]: identifies the workspace collaborators are asked about
//! - [`WorkspaceConfig`]: everything above as persisted in `hybris-context.yaml`
//!
//! All of these are read-only inputs. Nothing in the crate mutates or caches them.

pub mod config;
pub mod settings;
pub mod workspace;

pub use config::WorkspaceConfig;
pub use settings::{ConnectionType, RemoteConnectionSettings, SettingsSnapshot};
pub use workspace::{Unit, UnitKind, WorkspaceHandle};
