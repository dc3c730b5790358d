use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/imagepro")])).unwrap();
    assert_eq!(cfg.database_url, "postgres://localhost/imagepro");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert!(!cfg.cookie_secure);
    assert!(!cfg.echo_access_codes);
    assert_eq!(cfg.prune_interval_secs, DEFAULT_PRUNE_INTERVAL_SECS);
    assert!(cfg.email.is_none());
}

#[test]
fn from_lookup_requires_database_url() {
    let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));

    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/imagepro"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", " 12 "),
        ("COOKIE_SECURE", "yes"),
        ("AUTH_ECHO_CODES", "ON"),
        ("RESEND_API_KEY", "re_test"),
        ("RESEND_FROM", "ImagePro <hi@example.com>"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.db_max_connections, 12);
    assert!(cfg.cookie_secure);
    assert!(cfg.echo_access_codes);
    assert_eq!(
        cfg.email,
        Some(EmailConfig { api_key: "re_test".into(), from: "ImagePro <hi@example.com>".into() })
    );
}

#[test]
fn from_lookup_uses_default_sender_when_from_missing() {
    let cfg =
        ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("RESEND_API_KEY", "re_x")])).unwrap();
    assert_eq!(cfg.email.map(|e| e.from), Some(DEFAULT_RESEND_FROM.to_owned()));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "http".into() });
}

#[test]
fn from_lookup_rejects_bad_bool() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("COOKIE_SECURE", "maybe")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "COOKIE_SECURE", value: "maybe".into() });
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "OFF"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
}

#[test]
fn from_lookup_reads_prune_interval() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db"),
        ("SESSION_PRUNE_INTERVAL_SECS", "600"),
    ]))
    .unwrap();
    assert_eq!(cfg.prune_interval_secs, 600);
}

#[test]
fn from_lookup_rejects_zero_or_garbage_prune_interval() {
    for raw in ["0", "hourly"] {
        let err = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("SESSION_PRUNE_INTERVAL_SECS", raw),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid { key: "SESSION_PRUNE_INTERVAL_SECS", value: raw.to_owned() });
    }
}
