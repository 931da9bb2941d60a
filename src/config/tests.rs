//! Tests for Configuration Module

use super::*;
use crate::logging::LogLevel;
use tempfile::TempDir;

/// Create a test config store with temporary directory
fn create_test_store() -> (ConfigStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let settings = ConfigStoreConfig {
        config_path: temp_dir.path().join("config.json"),
        create_default: true,
    };

    let store = ConfigStore::new(settings).unwrap();
    (store, temp_dir)
}

#[test]
fn test_create_default_config() {
    let (store, _temp) = create_test_store();

    let config = store.get();
    assert_eq!(config.version, 1);
    assert_eq!(config.path_delimiter, "/");
    assert_eq!(config.logging.level, LogLevel::Info);
    assert!(store.config_path().exists());
}

#[test]
fn test_missing_config_without_default() {
    let temp_dir = TempDir::new().unwrap();
    let settings = ConfigStoreConfig {
        config_path: temp_dir.path().join("absent.json"),
        create_default: false,
    };

    let result = ConfigStore::new(settings);
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
fn test_update_config_persists() {
    let (store, temp) = create_test_store();

    let updated = store
        .update(|config| config.path_delimiter = " > ".to_string())
        .unwrap();
    assert_eq!(updated.path_delimiter, " > ");

    // A fresh store over the same file sees the change
    let reopened = ConfigStore::new(ConfigStoreConfig {
        config_path: temp.path().join("config.json"),
        create_default: false,
    })
    .unwrap();
    assert_eq!(reopened.get().path_delimiter, " > ");
}

#[test]
fn test_invalid_update_is_rejected() {
    let (store, _temp) = create_test_store();

    let result = store.set_path_delimiter(String::new());
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
    assert_eq!(store.get().path_delimiter, "/");
}

#[test]
fn test_validate_config() {
    assert!(GraphConfig::default().validate().is_ok());

    let empty = GraphConfig::default().with_path_delimiter("");
    assert!(empty.validate().is_err());

    let mut unversioned = GraphConfig::default();
    unversioned.version = 0;
    assert!(unversioned.validate().is_err());
}

#[test]
fn test_partial_file_uses_defaults() {
    let config: GraphConfig = serde_json::from_str(r#"{ "path_delimiter": "::" }"#).unwrap();

    assert_eq!(config.path_delimiter, "::");
    assert_eq!(config.version, 1);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn test_export_import() {
    let (store, temp) = create_test_store();

    store.set_path_delimiter("|".to_string()).unwrap();

    let export_path = temp.path().join("exported.json");
    store.export(&export_path).unwrap();

    store.reset().unwrap();
    assert_eq!(store.get().path_delimiter, "/");

    let imported = store.import(&export_path).unwrap();
    assert_eq!(imported.path_delimiter, "|");
    assert_eq!(store.get().path_delimiter, "|");
}

#[test]
fn test_import_returns_stored_config() {
    let (store, temp) = create_test_store();

    let import_path = temp.path().join("old.json");
    std::fs::write(
        &import_path,
        r#"{ "path_delimiter": "::", "last_modified": "2000-01-01T00:00:00+00:00" }"#,
    )
    .unwrap();

    let imported = store.import(&import_path).unwrap();
    assert_eq!(imported, store.get());
    assert_eq!(imported.path_delimiter, "::");
    assert_ne!(imported.last_modified, "2000-01-01T00:00:00+00:00");

    let reset = store.reset().unwrap();
    assert_eq!(reset, store.get());
    assert_eq!(reset.path_delimiter, "/");
}

#[test]
fn test_import_rejects_invalid_file() {
    let (store, temp) = create_test_store();

    let bad_path = temp.path().join("bad.json");
    std::fs::write(&bad_path, r#"{ "path_delimiter": "" }"#).unwrap();

    assert!(matches!(store.import(&bad_path), Err(ConfigError::Invalid(_))));
    assert!(matches!(
        store.import(&temp.path().join("nope.json")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_set_replaces_whole_config() {
    let (store, _temp) = create_test_store();

    let replacement = GraphConfig::default()
        .with_path_delimiter(" / ")
        .with_logging(crate::logging::LoggingConfig::development());
    store.set(replacement).unwrap();

    let config = store.get();
    assert_eq!(config.path_delimiter, " / ");
    assert_eq!(config.logging.level, LogLevel::Debug);
}
