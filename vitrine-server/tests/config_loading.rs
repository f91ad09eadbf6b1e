use std::{collections::HashMap, fs, path::PathBuf};

use tempfile::TempDir;
use vitrine_core::DirectoryPolicy;
use vitrine_server::infra::config::{
    ConfigLoadError, ConfigLoader, ConfigOverrides, EnvConfig,
};

fn env(pairs: &[(&str, &str)]) -> EnvConfig {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    EnvConfig::from_lookup(|name| map.get(name).cloned()).unwrap()
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("vitrine.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn file_values_apply_over_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let media_root = temp_dir.path().join("media");
    fs::create_dir(&media_root).unwrap();
    let path = write_config(
        &temp_dir,
        &format!(
            r#"
[server]
port = 8088

[media]
root = "{}"
url_prefix = "files/"
include_directories = false

[cors]
allowed_origins = ["http://gallery.test"]
"#,
            media_root.display()
        ),
    );

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env(&[]))
        .unwrap();
    let config = load.config;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8088);
    assert_eq!(config.media.root, media_root);
    assert_eq!(config.media.url_prefix, "/files");
    assert!(config.media.serve_files);
    assert_eq!(config.media.directory_policy(), DirectoryPolicy::Skip);
    assert_eq!(config.cors.allowed_origins, vec!["http://gallery.test"]);
    assert_eq!(config.metadata.config_path, Some(path));
    assert!(load.warnings.is_empty());
}

#[test]
fn environment_overrides_file_and_cli_overrides_environment() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[server]
host = "127.0.0.1"
port = 4000

[media]
url_prefix = "/from-file"
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_overrides(ConfigOverrides {
            port: Some(6000),
            media_root: Some(temp_dir.path().to_path_buf()),
            ..ConfigOverrides::default()
        })
        .load_with_env(env(&[
            ("SERVER_PORT", "5000"),
            ("SERVER_HOST", "::1"),
            ("MEDIA_URL_PREFIX", "/from-env"),
            ("MEDIA_ROOT", "/not/used"),
            ("MEDIA_SERVE_FILES", "false"),
        ]))
        .unwrap()
        .config;

    assert_eq!(config.server.host, "::1");
    assert_eq!(config.server.port, 6000);
    assert_eq!(config.media.url_prefix, "/from-env");
    assert_eq!(config.media.root, temp_dir.path());
    assert!(!config.media.serve_files);
}

#[test]
fn config_path_can_come_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[server]\nport = 7100\n");

    let config = ConfigLoader::new()
        .load_with_env(env(&[("VITRINE_CONFIG", path.to_str().unwrap())]))
        .unwrap()
        .config;
    assert_eq!(config.server.port, 7100);
}

#[test]
fn explicit_missing_config_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let err = ConfigLoader::new()
        .with_config_path(&missing)
        .load_with_env(env(&[]))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::MissingConfig { path } if path == missing));
}

#[test]
fn malformed_config_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[server\nport = ");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env(&[]))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[media]\nrooot = \"typo\"\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env(&[]))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn root_prefix_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[media]\nurl_prefix = \"/\"\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env(&[]))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::GuardRail(_)));
}

#[test]
fn prefix_needing_percent_encoding_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env(&[("MEDIA_URL_PREFIX", "/my media")]))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::GuardRail(_)));
}

#[test]
fn missing_media_root_is_only_a_warning() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "");

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .with_overrides(ConfigOverrides {
            media_root: Some(temp_dir.path().join("absent")),
            ..ConfigOverrides::default()
        })
        .load_with_env(env(&[]))
        .unwrap();

    assert_eq!(load.warnings.items.len(), 1);
    assert!(load.warnings.items[0].message.contains("absent"));
}
