use super::{load_settings_from, Settings, DEFAULT_API_BASE_URL};

use std::{
    env, fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_to_local_api_when_nothing_is_configured() {
    let settings = load_settings_from(Path::new("does-not-exist.toml"), no_env);
    assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn file_value_is_overridden_by_environment() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("warehouse_dashboard_cfg_{suffix}.toml"));
    fs::write(&path, "api_base_url = \"http://files.example:9000/api\"\n").expect("write");

    let from_file = load_settings_from(&path, no_env);
    assert_eq!(from_file.api_base_url, "http://files.example:9000/api");

    let from_env = load_settings_from(&path, |key| match key {
        "WAREHOUSE_API_URL" => Some("http://legacy.example/api".to_string()),
        "APP__API_BASE_URL" => Some("http://env.example/api".to_string()),
        _ => None,
    });
    assert_eq!(from_env.api_base_url, "http://env.example/api");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn cli_override_wins() {
    let settings = Settings::default().with_api_base_url(Some("http://10.0.0.5/api".into()));
    assert_eq!(settings.api_base_url, "http://10.0.0.5/api");
    let unchanged = Settings::default().with_api_base_url(None);
    assert_eq!(unchanged, Settings::default());
}

#[test]
fn rejects_non_http_base_urls() {
    let ok = Settings::default().validated_base_url().expect("default is valid");
    assert_eq!(ok.path(), "/api");

    for raw in ["ftp://host/api", "not a url", "mailto:ops@example.com"] {
        let settings = Settings {
            api_base_url: raw.to_string(),
        };
        assert!(settings.validated_base_url().is_err(), "{raw} accepted");
    }
}
