use super::*;

use std::{
    collections::HashMap,
    env, fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_file(contents: &str) -> (PathBuf, PathBuf) {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let root = env::temp_dir().join(format!("customer_console_settings_test_{suffix}"));
    fs::create_dir_all(&root).expect("temp root");
    let path = root.join(SETTINGS_FILE);
    fs::write(&path, contents).expect("write settings");
    (root, path)
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings =
        load_settings_from(Path::new("/nonexistent/console.toml"), env_from(&[])).expect("load");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.service_url, "http://localhost:8000");
}

#[test]
fn file_values_are_overridden_by_env() {
    let (root, path) = temp_settings_file(
        "service_url = \"http://directory.internal:9000/\"\nlog_filter = \"debug\"\n",
    );

    let from_file = load_settings_from(&path, env_from(&[])).expect("load");
    assert_eq!(from_file.service_url, "http://directory.internal:9000");
    assert_eq!(from_file.log_filter, "debug");

    let from_env = load_settings_from(
        &path,
        env_from(&[
            ("CUSTOMER_SERVICE_URL", "http://legacy:1"),
            ("APP__SERVICE_URL", "https://directory.example.com/api"),
            ("APP__LOG_FILTER", "console_core=trace"),
        ]),
    )
    .expect("load");
    assert_eq!(from_env.service_url, "https://directory.example.com/api");
    assert_eq!(from_env.log_filter, "console_core=trace");

    fs::remove_dir_all(root).expect("cleanup");
}

#[test]
fn malformed_file_is_reported() {
    let (root, path) = temp_settings_file("service_url = [\n");
    let err = load_settings_from(&path, env_from(&[])).expect_err("must fail");
    assert!(matches!(err, SettingsError::Parse { .. }), "unexpected error: {err}");
    fs::remove_dir_all(root).expect("cleanup");
}

#[test]
fn normalizes_service_urls() {
    assert_eq!(
        normalize_service_url("  http://localhost:8000/ ").expect("valid"),
        "http://localhost:8000"
    );
    assert_eq!(normalize_service_url("").expect("valid"), DEFAULT_SERVICE_URL);
    assert!(normalize_service_url("localhost:8000").is_err());
    assert!(normalize_service_url("ftp://files.example.com").is_err());
}
