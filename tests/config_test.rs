use datrep::config::{AppConfig, ConfigManager};

#[test]
fn test_load_custom_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
        version = "1"

        [file_loading]
        delimiter = 59
        has_header = false

        [display]
        sample_rows = 5
        start_tab = "sample-tab"
        "#,
    )
    .unwrap();

    let manager = ConfigManager::with_dir(dir.path().to_path_buf());
    let config = manager.load_config().unwrap();

    assert_eq!(config.file_loading.delimiter, Some(59));
    assert_eq!(config.file_loading.has_header, Some(false));
    assert_eq!(config.display.sample_rows, 5);
    assert_eq!(config.display.start_tab.as_deref(), Some("sample-tab"));
}

#[test]
fn test_missing_config_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_dir(dir.path().to_path_buf());
    let config = manager.load_config().unwrap();
    assert_eq!(config.display.sample_rows, AppConfig::default().display.sample_rows);
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "display = 42").unwrap();

    let manager = ConfigManager::with_dir(dir.path().to_path_buf());
    assert!(manager.load_config().is_err());
}

#[test]
fn test_write_default_config_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_dir(dir.path().join("datrep"));

    let path = manager.write_default_config(false).unwrap();
    assert!(path.exists());

    let config = manager.load_config().unwrap();
    assert_eq!(config.display.sample_rows, 10);

    // A second write without force is refused
    assert!(manager.write_default_config(false).is_err());
    assert!(manager.write_default_config(true).is_ok());
}
