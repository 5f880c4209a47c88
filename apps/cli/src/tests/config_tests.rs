use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

use super::*;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_point_at_the_documentation_webhooks() {
    let settings = Settings::default();
    assert!(settings.lookup_url.starts_with("https://"));
    assert!(settings.submission_url.starts_with("https://"));
    assert_ne!(settings.lookup_url, settings.submission_url);
    assert_eq!(settings.notification_duration(), Duration::from_secs(5));
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
lookup_url = "http://localhost:5678/webhook/lookup"
notification_duration_ms = 1500
"#,
    )
    .expect("valid toml");

    assert_eq!(settings.lookup_url, "http://localhost:5678/webhook/lookup");
    assert_eq!(settings.submission_url, Settings::default().submission_url);
    assert_eq!(settings.notification_duration_ms, 1500);
}

#[test]
fn malformed_file_is_rejected() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "notification_duration_ms = \"soon\"").is_err());
}

#[test]
fn app_prefixed_env_wins_over_flowdoc_prefix() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_of(&[
            ("FLOWDOC_LOOKUP_URL", "http://a.test/lookup"),
            ("APP__LOOKUP_URL", "http://b.test/lookup"),
            ("FLOWDOC_SUBMISSION_URL", "http://a.test/submit"),
            ("FLOWDOC_NOTIFICATION_MS", " 250 "),
        ]),
    )
    .expect("env");

    assert_eq!(settings.lookup_url, "http://b.test/lookup");
    assert_eq!(settings.submission_url, "http://a.test/submit");
    assert_eq!(settings.notification_duration_ms, 250);
}

#[test]
fn non_numeric_notification_env_is_an_error() {
    let mut settings = Settings::default();
    let err = apply_env(&mut settings, env_of(&[("APP__NOTIFICATION_MS", "5s")]))
        .expect_err("must fail");
    assert!(err.to_string().contains("APP__NOTIFICATION_MS"));
}

#[test]
fn explicit_config_path_must_exist() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let missing = env::temp_dir().join(format!("flowdoc_missing_{suffix}.toml"));

    let err = load_settings(Some(missing.as_path())).expect_err("missing file");
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn explicit_config_path_is_loaded() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("flowdoc_config_{suffix}.toml"));
    fs::write(&path, "submission_url = \"http://127.0.0.1:8080/submit\"\n").expect("write");

    let settings = load_settings(Some(path.as_path())).expect("load");
    fs::remove_file(&path).expect("cleanup");

    if env::var("FLOWDOC_SUBMISSION_URL").is_err() && env::var("APP__SUBMISSION_URL").is_err() {
        assert_eq!(settings.submission_url, "http://127.0.0.1:8080/submit");
    }
}

#[test]
fn endpoint_urls_must_be_http() {
    assert!(parse_endpoint_url("lookup_url", "https://n8n.example.com/webhook/x").is_ok());
    assert!(parse_endpoint_url("lookup_url", " http://localhost:5678/hook ").is_ok());

    let err = parse_endpoint_url("lookup_url", "ftp://example.com/x").expect_err("scheme");
    assert!(err.to_string().contains("http or https"));
    assert!(parse_endpoint_url("submission_url", "not a url").is_err());
}
