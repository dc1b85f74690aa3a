use devto_sync::load_config::{load_config, DIRECTORY_ENV};
use serial_test::serial;
use std::env;
use std::fs::write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn config_file(yaml: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file");
    write(file.path(), yaml).unwrap();
    file
}

#[test]
#[serial]
fn test_load_config_defaults_extension() {
    env::remove_var(DIRECTORY_ENV);
    let file = config_file("directory: ./articles\n");

    let config = load_config(file.path()).expect("Config should load");

    assert_eq!(config.directory, PathBuf::from("./articles"));
    assert_eq!(config.extension, "md");
}

#[test]
#[serial]
fn test_load_config_normalises_leading_dot() {
    env::remove_var(DIRECTORY_ENV);
    let file = config_file("directory: posts\nextension: .markdown\n");

    let config = load_config(file.path()).expect("Config should load");
    assert_eq!(config.extension, "markdown");
}

#[test]
#[serial]
fn test_env_overrides_directory() {
    let file = config_file("directory: ./articles\n");
    env::set_var(DIRECTORY_ENV, "/srv/blog/posts");

    let config = load_config(file.path());
    env::remove_var(DIRECTORY_ENV);

    assert_eq!(
        config.expect("Config should load").directory,
        PathBuf::from("/srv/blog/posts")
    );
}

#[test]
#[serial]
fn test_load_config_errors_on_missing_file() {
    let result = load_config("/definitely/not/here/devto-sync.yaml");
    let err = result.expect_err("Missing file must fail");
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
#[serial]
fn test_load_config_errors_on_invalid_yaml() {
    let file = config_file("extension: md\n");
    let err = load_config(file.path()).expect_err("directory is required");
    assert!(err.to_string().contains("Failed to parse config YAML"));
}

#[test]
#[serial]
fn test_load_config_rejects_empty_extension() {
    env::remove_var(DIRECTORY_ENV);
    let file = config_file("directory: posts\nextension: \".\"\n");
    assert!(load_config(file.path()).is_err());
}
