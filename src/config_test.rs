use super::*;

#[test]
fn from_values_uses_defaults_when_missing() {
    let config = ServiceConfig::from_values(None, None, None).expect("config");
    assert_eq!(config, ServiceConfig::default());
    assert_eq!(config.url, "http://localhost:54321");
    assert_eq!(config.session_timeout, Duration::from_millis(10_000));
}

#[test]
fn from_values_treats_blank_as_missing() {
    let config = ServiceConfig::from_values(Some("  "), Some(" "), Some("")).expect("config");
    assert_eq!(config, ServiceConfig::default());
}

#[test]
fn from_values_strips_trailing_slashes() {
    let config = ServiceConfig::from_values(Some("https://abc.supabase.co//"), Some(" key "), Some("2500"))
        .expect("config");
    assert_eq!(config.url, "https://abc.supabase.co");
    assert_eq!(config.anon_key, "key");
    assert_eq!(config.session_timeout, Duration::from_millis(2500));
}

#[test]
fn from_values_rejects_non_http_url() {
    assert_eq!(
        ServiceConfig::from_values(Some("ftp://x"), None, None),
        Err(ConfigError::InvalidUrl("ftp://x".to_owned()))
    );
}

#[test]
fn from_values_rejects_bad_timeout() {
    assert_eq!(
        ServiceConfig::from_values(None, None, Some("0")),
        Err(ConfigError::InvalidTimeout("0".to_owned()))
    );
    assert_eq!(
        ServiceConfig::from_values(None, None, Some("soon")),
        Err(ConfigError::InvalidTimeout("soon".to_owned()))
    );
}

#[test]
fn session_storage_key_uses_project_ref() {
    let config = ServiceConfig::from_values(Some("https://abcd.supabase.co"), None, None).expect("config");
    assert_eq!(config.session_storage_key(), "sb-abcd-auth-token");
}

#[test]
fn session_storage_key_for_local_stack() {
    assert_eq!(ServiceConfig::default().session_storage_key(), "sb-localhost-auth-token");
}
