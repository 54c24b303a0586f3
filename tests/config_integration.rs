//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use skyroll::config::AppConfig;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SKYROLL_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("SKYROLL_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_scroll_values() {
    std::env::set_var("SKYROLL_SCROLL__X_ACCEL", "96.0");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.scroll.x_accel, 96.0);
    std::env::remove_var("SKYROLL_SCROLL__X_ACCEL");
}

#[test]
#[serial]
fn test_default_file_loading() {
    // Remove env vars to test file-based config
    std::env::remove_var("SKYROLL_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(
        cwd.join("config/default.toml").exists(),
        "config/default.toml should ship with the repository"
    );

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.virtual_width, 512);
    assert_eq!(config.window.virtual_height, 288);
}

#[test]
#[serial]
fn test_missing_directory_falls_back_to_defaults() {
    let config = AppConfig::load_from("no-such-config-dir").unwrap();
    assert_eq!(config.window.title, AppConfig::default().window.title);
}
