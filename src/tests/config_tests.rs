#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use tempfile::tempdir;

    use crate::implementations::config::{
        AdminCredentials, ClientConfig, ConfigError, ENV_ADMIN_LOGIN_ID, ENV_ADMIN_PASSWORD, ENV_BACKEND_URL,
        ENV_SESSION_FILE,
    };
    use crate::tests::mock_api::setup;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_backend() {
        setup();
        let config = ClientConfig::default();
        assert_eq!(config.api_url(), "http://localhost:8000/api");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn api_url_normalizes_slashes() {
        setup();
        let config = ClientConfig {
            backend_url: "https://stays.example.com/".to_string(),
            api_prefix: "api/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.api_url(), "https://stays.example.com/api");

        let bare = ClientConfig {
            api_prefix: String::new(),
            ..ClientConfig::default()
        };
        assert_eq!(bare.api_url(), "http://localhost:8000");
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        setup();
        let dir = tempdir().unwrap();
        let path = dir.path().join("vattavada.yaml");
        std::fs::write(
            &path,
            "backend_url: https://stays.example.com\ntimeout_secs: 5\nadmin:\n  login_id: ops\n  password: secret\n",
        )
        .unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.backend_url, "https://stays.example.com");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.admin, Some(AdminCredentials::new("ops", "secret")));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        setup();
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "timeout_secs: [not a number").unwrap();
        assert!(matches!(ClientConfig::from_file(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn environment_overrides_file_values() {
        setup();
        let mut config = ClientConfig::default();
        config.apply_env(lookup(&[
            (ENV_BACKEND_URL, "https://api.example.com"),
            (ENV_SESSION_FILE, "/tmp/session.json"),
            (ENV_ADMIN_LOGIN_ID, "ops"),
            (ENV_ADMIN_PASSWORD, "secret"),
        ]));
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.session_path().unwrap(), PathBuf::from("/tmp/session.json"));
        assert_eq!(config.admin_credentials(), Some(AdminCredentials::new("ops", "secret")));
    }

    #[test]
    fn partial_admin_credentials_are_ignored() {
        setup();
        let mut config = ClientConfig::default();
        config.apply_env(lookup(&[(ENV_ADMIN_LOGIN_ID, "ops")]));
        assert_eq!(config.admin, None);
    }

    #[test]
    fn rejects_non_http_backend_and_zero_timeout() {
        setup();
        let config = ClientConfig {
            backend_url: "localhost:8000".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue { .. })));

        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
