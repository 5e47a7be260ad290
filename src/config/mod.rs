use crate::models::{RemoteConnectionSettings, SettingsSnapshot, Unit, WorkspaceConfig, WorkspaceHandle};
use crate::provider::{SettingsProvider, UnitEnumerator};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// File name of the workspace configuration inside the configuration directory.
pub const WORKSPACE_CONFIG_FILE: &str = "hybris-context.yaml";

/// Prefix of environment variables overriding the workspace configuration.
///
/// Nested keys are separated by `__`, e.g. `HYBRIS_CONTEXT_PROJECT__CONFIG_DIRECTORY`.
pub const ENV_PREFIX: &str = "HYBRIS_CONTEXT";

/// Configuration manager for the workspace configuration file.
///
/// Loading layers the YAML file under environment overrides. Saving writes
/// the YAML file only.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    workspace_config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager for the specified configuration directory.
    ///
    /// The directory is created if it doesn't exist.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing `hybris-context.yaml`
    ///
    /// # Returns
    /// A new ConfigManager instance
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            workspace_config_path: config_dir.join(WORKSPACE_CONFIG_FILE),
            config_dir,
        })
    }

    /// Load the workspace configuration.
    ///
    /// Values from `hybris-context.yaml` are layered under environment
    /// variables prefixed with [`ENV_PREFIX`].
    ///
    /// # Returns
    /// The loaded WorkspaceConfig, or defaults (still subject to environment
    /// overrides) if the file doesn't exist
    ///
    /// # Errors
    /// Fails if the file is not valid YAML or does not match the expected shape.
    pub fn load_workspace_config(&self) -> Result<WorkspaceConfig> {
        if !self.workspace_config_path.exists() {
            tracing::warn!(
                "Workspace config file not found at {}, using defaults",
                self.workspace_config_path
            );
        }

        let layered = ::config::Config::builder()
            .add_source(
                ::config::File::from(self.workspace_config_path.as_std_path())
                    .format(::config::FileFormat::Yaml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| {
                format!("Failed to read workspace config: {}", self.workspace_config_path)
            })?;

        let config: WorkspaceConfig = layered.try_deserialize().with_context(|| {
            format!("Failed to parse workspace config: {}", self.workspace_config_path)
        })?;

        tracing::info!(
            "Loaded workspace config from {} ({} hybris profiles, {} solr profiles, {} units)",
            self.workspace_config_path,
            config.hybris_connections.len(),
            config.solr_connections.len(),
            config.units.len()
        );
        Ok(config)
    }

    /// Save the workspace configuration file.
    ///
    /// # Arguments
    /// * `config` - The WorkspaceConfig to save
    pub fn save_workspace_config(&self, config: &WorkspaceConfig) -> Result<()> {
        let yaml_string = serde_yaml_ng::to_string(config)
            .context("Failed to serialize workspace config to YAML")?;

        fs::write(&self.workspace_config_path, yaml_string).with_context(|| {
            format!("Failed to write workspace config: {}", self.workspace_config_path)
        })?;

        tracing::info!("Saved workspace config to {}", self.workspace_config_path);
        Ok(())
    }

    /// Load the configuration and wrap it as a collaborator for [`crate::ProjectContext`].
    ///
    /// # Returns
    /// A FileSettingsProvider serving the freshly loaded configuration
    pub fn load_provider(&self) -> Result<FileSettingsProvider> {
        Ok(FileSettingsProvider::new(self.load_workspace_config()?))
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    pub fn workspace_config_path(&self) -> &Utf8Path {
        &self.workspace_config_path
    }
}

/// Settings and units served from a loaded [`WorkspaceConfig`].
///
/// One configuration file describes one workspace, so the handle passed by
/// callers is only used for logging.
#[derive(Debug, Clone, Default)]
pub struct FileSettingsProvider {
    config: WorkspaceConfig,
}

impl FileSettingsProvider {
    pub fn new(config: WorkspaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }
}

impl SettingsProvider for FileSettingsProvider {
    fn project_settings(&self, workspace: &WorkspaceHandle) -> SettingsSnapshot {
        tracing::trace!("Project settings requested for {}", workspace);
        self.config.project.clone()
    }

    fn active_hybris_connection(&self, _workspace: &WorkspaceHandle) -> RemoteConnectionSettings {
        self.config.active_hybris_connection()
    }

    fn active_solr_connection(&self, _workspace: &WorkspaceHandle) -> RemoteConnectionSettings {
        self.config.active_solr_connection()
    }
}

impl UnitEnumerator for FileSettingsProvider {
    fn list_units(&self, _workspace: &WorkspaceHandle) -> Vec<Unit> {
        self.config.units.clone()
    }
}
