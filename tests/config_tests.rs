// Config loading and validation tests

mod common;

use common::TEST_CONFIG;
use waveshape::config::AppConfig;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(TEST_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(
        config.feed.url.as_deref(),
        Some("http://127.0.0.1:9/status.json")
    );
    assert_eq!(config.feed.timeout_ms, 2000);
    assert_eq!(config.publishing.broadcast_capacity, 10);
    assert_eq!(config.monitoring.poll_interval_ms, 1800);
    assert_eq!(config.theme.path, "data/theme.json");
}

#[test]
fn test_config_defaults_when_sections_omitted() {
    let minimal = r#"
[server]
port = 8080
host = "127.0.0.1"

[publishing]
broadcast_capacity = 4

[theme]
path = "theme.json"
"#;
    let config = AppConfig::load_from_str(minimal).expect("minimal config");
    assert!(config.feed.url.is_none());
    assert_eq!(config.feed.timeout_ms, 5000);
    assert_eq!(config.monitoring.poll_interval_ms, 1800);
    assert_eq!(config.monitoring.history_length, 40);
    assert_eq!(config.monitoring.history_fill, 20.0);
    assert_eq!(config.monitoring.stats_log_interval_secs, 60);
    assert_eq!(config.render.sparkline_width, 120.0);
    assert_eq!(config.render.sparkline_height, 40.0);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = TEST_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_non_http_feed_url() {
    let bad = TEST_CONFIG.replace(
        "url = \"http://127.0.0.1:9/status.json\"",
        "url = \"./Java/API/status.json\"",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("feed.url"));
}

#[test]
fn test_config_validation_rejects_feed_timeout_zero() {
    let bad = TEST_CONFIG.replace("timeout_ms = 2000", "timeout_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("feed.timeout_ms"));
}

#[test]
fn test_config_validation_rejects_broadcast_capacity_zero() {
    let bad = TEST_CONFIG.replace("broadcast_capacity = 10", "broadcast_capacity = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("broadcast_capacity"));
}

#[test]
fn test_config_validation_rejects_poll_interval_zero() {
    let bad = TEST_CONFIG.replace("poll_interval_ms = 1800", "poll_interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("poll_interval_ms"));
}

#[test]
fn test_config_validation_rejects_history_length_zero() {
    let bad = TEST_CONFIG.replace(
        "poll_interval_ms = 1800",
        "poll_interval_ms = 1800\nhistory_length = 0",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("history_length"));
}

#[test]
fn test_config_validation_rejects_history_fill_out_of_range() {
    let bad = TEST_CONFIG.replace(
        "poll_interval_ms = 1800",
        "poll_interval_ms = 1800\nhistory_fill = 140.0",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("history_fill"));
}

#[test]
fn test_config_validation_rejects_stats_log_interval_zero() {
    let bad = TEST_CONFIG.replace(
        "stats_log_interval_secs = 60",
        "stats_log_interval_secs = 0",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("stats_log_interval_secs"));
}

#[test]
fn test_config_validation_rejects_empty_theme_path() {
    let bad = TEST_CONFIG.replace("path = \"data/theme.json\"", "path = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("theme.path"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, TEST_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.theme.path, "data/theme.json");
}
