//! Integration tests for ConfigManager and the file-backed settings provider
//!
//! These tests verify:
//! - Loading defaults when no configuration file exists
//! - Saving and reloading the workspace configuration
//! - Active profile selection feeding the ProjectContext facade

use camino::Utf8PathBuf;
use hybris_context::{
    ConfigManager, ConnectionType, ProjectContext, RemoteConnectionSettings, SettingsSnapshot,
    Unit, UnitKind, WorkspaceConfig, WorkspaceHandle,
};
use std::fs;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

fn sample_config(config_directory: &str) -> WorkspaceConfig {
    WorkspaceConfig {
        project: SettingsSnapshot {
            hybris_directory: Some("/opt/hybris".to_string()),
            custom_directory: Some("/opt/hybris/bin/custom".to_string()),
            config_directory: Some(config_directory.to_string()),
            imported_by_version: Some("9.2.1".to_string()),
            hybris_project: true,
        },
        hybris_connections: vec![
            RemoteConnectionSettings::default_hybris(),
            RemoteConnectionSettings {
                name: "staging".to_string(),
                connection_type: ConnectionType::Hybris,
                host_ip: "staging.example.com".to_string(),
                port: Some("443".to_string()),
                webroot: Some("/hac".to_string()),
            },
        ],
        active_hybris_connection: Some("staging".to_string()),
        solr_connections: vec![],
        active_solr_connection: None,
        units: vec![
            Unit::new("platform", UnitKind::Platform),
            Unit::new("hmc", UnitKind::Ootb),
        ],
    }
}

#[test]
fn test_create_config_manager() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    assert_eq!(manager.config_dir(), &config_path);
}

#[test]
fn test_load_default_workspace_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let config = manager.load_workspace_config().unwrap();
    assert_eq!(config.project, SettingsSnapshot::default());
    assert!(config.units.is_empty());
    assert_eq!(config.active_hybris_connection(), RemoteConnectionSettings::default_hybris());
}

#[test]
fn test_save_and_load_workspace_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let config = sample_config(config_path.as_str());
    manager.save_workspace_config(&config).unwrap();

    let loaded = manager.load_workspace_config().unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();
    fs::write(manager.workspace_config_path(), "project: [unclosed").unwrap();

    assert!(manager.load_workspace_config().is_err());
}

#[test]
fn test_file_provider_drives_project_context() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();
    manager.save_workspace_config(&sample_config(config_path.as_str())).unwrap();
    fs::write(config_path.join("local.properties"), "tomcat.http.port=8080\n").unwrap();

    let provider = manager.load_provider().unwrap();
    let context = ProjectContext::new(provider.clone(), provider);
    let workspace = WorkspaceHandle::new(config_path.as_str()).unwrap();

    assert!(context.is_hybris_project(&workspace));
    assert!(!context.is_outdated_hybris_project(&workspace));
    assert!(context.is_potentially_hybris_project(&workspace));
    assert_eq!(context.platform_unit(&workspace).map(|u| u.name), Some("platform".to_string()));
    assert_eq!(context.host_url(&workspace, None), "https://staging.example.com:443");
    assert_eq!(
        context.host_hac_url(&workspace, None),
        "https://staging.example.com:443/hac"
    );
    assert_eq!(context.host_solr_url(&workspace, None), "https://localhost:8983/solr");
}
