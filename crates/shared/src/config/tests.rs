use super::*;
use rstest::rstest;
use std::collections::HashMap;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_server_config_default() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn test_apply_env_without_vars_keeps_defaults() {
    let mut config = AppConfig::default();
    config.apply_env(lookup_from(&[]));

    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.server.host, DEFAULT_HOST);
    assert!(config.cloud_provider.is_unknown());
}

#[rstest]
#[case("8080", 8080)]
#[case(" 4000 ", 4000)]
#[case("0", 0)]
#[case("65535", 65535)]
#[case("abc", 3000)]
#[case("70000", 3000)]
#[case("-1", 3000)]
#[case("", 3000)]
fn test_apply_env_port(#[case] raw: &str, #[case] expected: u16) {
    let mut config = AppConfig::default();
    config.apply_env(lookup_from(&[("PORT", raw)]));
    assert_eq!(config.server.port, expected);
}

#[rstest]
#[case("AWS", "AWS")]
#[case("GCP", "GCP")]
#[case("", "Unknown")]
fn test_apply_env_cloud_provider(#[case] raw: &str, #[case] expected: &str) {
    let mut config = AppConfig::default();
    config.apply_env(lookup_from(&[("CLOUD_PROVIDER", raw)]));
    assert_eq!(config.cloud_provider.as_str(), expected);
}

#[test]
fn test_apply_env_host() {
    let mut config = AppConfig::default();
    config.apply_env(lookup_from(&[("HOST", "127.0.0.1")]));
    assert_eq!(config.server.bind_addr(), "127.0.0.1:3000");

    config.apply_env(lookup_from(&[("HOST", "")]));
    assert_eq!(config.server.host, "127.0.0.1");
}

#[test]
fn test_load_defaults() {
    temp_env::with_vars(
        [
            ("RUN_MODE", None::<&str>),
            ("HOST", None),
            ("PORT", None),
            ("CLOUD_PROVIDER", None),
        ],
        || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.cloud_provider.as_str(), "Unknown");
        },
    );
}

#[test]
fn test_load_from_env() {
    temp_env::with_vars(
        [
            ("RUN_MODE", None),
            ("HOST", None),
            ("PORT", Some("8081")),
            ("CLOUD_PROVIDER", Some("AWS")),
        ],
        || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.server.port, 8081);
            assert_eq!(config.cloud_provider.as_str(), "AWS");
        },
    );
}

#[test]
fn test_load_treats_empty_cloud_provider_as_unset() {
    temp_env::with_vars(
        [
            ("RUN_MODE", None),
            ("PORT", Some("not-a-port")),
            ("CLOUD_PROVIDER", Some("")),
        ],
        || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.server.port, 3000);
            assert!(config.cloud_provider.is_unknown());
        },
    );
}
