//! Settings file and CLI precedence
use std::fs;
use std::path::PathBuf;

use billypad::config::{Args, Config, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use tempfile::tempdir;

fn args_with(config: Option<PathBuf>) -> Args {
    Args {
        config,
        log_level: "info".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_settings_file_sets_window_size() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "width = 640\nheight = 480\n").expect("write");

    let config = Config::from_args(args_with(Some(path.clone()))).expect("config");

    assert_eq!(config.window.width, 640);
    assert_eq!(config.window.height, 480);
    assert_eq!(config.settings_path, Some(path));
}

#[test]
fn test_cli_overrides_settings_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "width = 640\nheight = 480\n").expect("write");

    let mut args = args_with(Some(path));
    args.height = Some(900);
    let config = Config::from_args(args).expect("config");

    assert_eq!(config.window.width, 640);
    assert_eq!(config.window.height, 900);
}

#[test]
fn test_invalid_values_retain_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "width = 0\nheight = 12.5\ncolor = \"blue\"\n").expect("write");

    let config = Config::from_args(args_with(Some(path))).expect("config");

    assert_eq!(config.window.width, DEFAULT_WIDTH);
    assert_eq!(config.window.height, DEFAULT_HEIGHT);
}

#[test]
fn test_malformed_settings_file_is_ignored() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "width = = 3\n[[[").expect("write");

    let config = Config::from_args(args_with(Some(path))).expect("config");

    assert_eq!(config.window.width, DEFAULT_WIDTH);
    assert_eq!(config.window.height, DEFAULT_HEIGHT);
    assert!(config.icon.is_none());
}

#[test]
fn test_icon_path_is_relative_to_settings_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "icon = \"res/BillyPad.ico\"\n").expect("write");

    let config = Config::from_args(args_with(Some(path))).expect("config");

    assert_eq!(config.icon, Some(dir.path().join("res").join("BillyPad.ico")));
}

#[test]
fn test_explicit_missing_settings_file_fails() {
    let dir = tempdir().expect("tempdir");
    let result = Config::from_args(args_with(Some(dir.path().join("absent.toml"))));
    assert!(result.is_err());
}
