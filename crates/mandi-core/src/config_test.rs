use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "MANDI_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.content_dir, std::path::PathBuf::from("./content"));
    assert_eq!(cfg.site_url, "http://localhost:3000");
    assert_eq!(cfg.whatsapp_number, "");
    assert_eq!(cfg.revalidate_secs, 60);
    assert!(!cfg.serve_inactive_by_slug);
    assert_eq!(cfg.rate_limit_per_minute, 120);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("MANDI_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MANDI_BIND_ADDR"),
        "expected InvalidEnvVar(MANDI_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn site_url_trailing_slash_is_trimmed() {
    let mut map = HashMap::new();
    map.insert("MANDI_SITE_URL", "https://malsmandi.example/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.site_url, "https://malsmandi.example");
}

#[test]
fn whatsapp_number_override() {
    let mut map = HashMap::new();
    map.insert("MANDI_WHATSAPP_NUMBER", " 919876543210 ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.whatsapp_number, "919876543210");
}

#[test]
fn whatsapp_number_is_redacted_in_debug_output() {
    let mut map = HashMap::new();
    map.insert("MANDI_WHATSAPP_NUMBER", "919876543210");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("919876543210"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn revalidate_secs_override() {
    let mut map = HashMap::new();
    map.insert("MANDI_REVALIDATE_SECS", "300");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.revalidate_secs, 300);
}

#[test]
fn revalidate_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("MANDI_REVALIDATE_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MANDI_REVALIDATE_SECS"),
        "expected InvalidEnvVar(MANDI_REVALIDATE_SECS), got: {result:?}"
    );
}

#[test]
fn serve_inactive_by_slug_accepts_truthy_values() {
    for raw in ["true", "1", "YES"] {
        let mut map = HashMap::new();
        map.insert("MANDI_SERVE_INACTIVE_BY_SLUG", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.serve_inactive_by_slug, "{raw} should enable the flag");
    }
}

#[test]
fn serve_inactive_by_slug_invalid() {
    let mut map = HashMap::new();
    map.insert("MANDI_SERVE_INACTIVE_BY_SLUG", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MANDI_SERVE_INACTIVE_BY_SLUG"),
        "expected InvalidEnvVar(MANDI_SERVE_INACTIVE_BY_SLUG), got: {result:?}"
    );
}

#[test]
fn rate_limit_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("MANDI_RATE_LIMIT_PER_MINUTE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MANDI_RATE_LIMIT_PER_MINUTE"),
        "expected InvalidEnvVar(MANDI_RATE_LIMIT_PER_MINUTE), got: {result:?}"
    );
}
