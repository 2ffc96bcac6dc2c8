use std::io::Write;

use surgewatch::error::{ConfigError, Error};
use surgewatch::infrastructure::config::settings::Config;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn full_config_file_loads() {
    let file = write_temp_config(
        r#"
[logging]
level = "debug"
format = "json"

[binance]
ws_url = "wss://fstream.binance.com/stream"
api_url = "https://fapi.binance.com"
kline_interval = "1m"

[binance.http]
timeout_ms = 2000
retry_max_attempts = 5

[connection]
max_symbols_per_connection = 50
rotation_period_secs = 3600
reconnect_backoff_ms = 1000

[detector]
surge_threshold_percent = 7.5

[heartbeat]
enabled = true
period_secs = 60

[telegram]
enabled = true
notify_heartbeats = false
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.binance.kline_interval, "1m");
    assert_eq!(config.binance.http.timeout_ms, 2000);
    assert_eq!(config.binance.http.retry_max_attempts, 5);
    assert_eq!(config.connection.max_symbols_per_connection, 50);
    assert_eq!(config.connection.rotation_period_secs, 3600);
    assert_eq!(config.connection.reconnect_backoff_ms, 1000);
    assert!((config.detector.surge_threshold_percent - 7.5).abs() < f64::EPSILON);
    assert_eq!(config.heartbeat.period_secs, 60);
    assert!(config.telegram.notify_surges);
    assert!(!config.telegram.notify_heartbeats);
}

#[test]
fn empty_file_yields_documented_defaults() {
    let file = write_temp_config("");

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.binance.ws_url, "wss://fstream.binance.com/stream");
    assert_eq!(config.binance.api_url, "https://fapi.binance.com");
    assert_eq!(config.binance.kline_interval, "5m");
    assert_eq!(config.connection.max_symbols_per_connection, 100);
    assert_eq!(config.connection.rotation_period_secs, 12 * 60 * 60);
    assert_eq!(config.connection.reconnect_backoff_ms, 5_000);
    assert_eq!(config.connection.connect_timeout_ms, 45_000);
    assert!((config.detector.surge_threshold_percent - 10.0).abs() < f64::EPSILON);
    assert!(config.heartbeat.enabled);
    assert_eq!(config.heartbeat.period_secs, 15 * 60);
}

#[test]
fn config_rejects_zero_shard_size() {
    let file = write_temp_config("[connection]\nmax_symbols_per_connection = 0\n");

    let err = Config::load(file.path()).unwrap_err();

    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue {
            field: "max_symbols_per_connection",
            ..
        })
    ));
}

#[test]
fn config_rejects_negative_threshold() {
    let file = write_temp_config("[detector]\nsurge_threshold_percent = -3.0\n");

    let err = Config::load(file.path()).unwrap_err();

    assert!(err.to_string().contains("surge_threshold_percent"));
}

#[test]
fn config_rejects_http_stream_url() {
    let file = write_temp_config("[binance]\nws_url = \"https://fstream.binance.com/stream\"\n");

    let err = Config::load(file.path()).unwrap_err();

    assert!(err.to_string().contains("ws_url"));
}

#[test]
fn config_rejects_malformed_toml() {
    let file = write_temp_config("[connection\nmax_symbols_per_connection = 10\n");

    let err = Config::load(file.path()).unwrap_err();

    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = Config::load(dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}

#[test]
fn credentials_are_not_read_from_the_file() {
    let file = write_temp_config("[telegram]\nbot_token = \"123:abc\"\nchat_id = 42\n");

    let config = Config::load(file.path()).unwrap();

    assert!(!format!("{config:?}").contains("123:abc"));
}
