use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("CARALYTIX_API_HOST");
        std::env::remove_var("CARALYTIX_API_TIMEOUT_SECS");
        std::env::remove_var("CARALYTIX_API_CONNECT_TIMEOUT_SECS");
    }
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_applies_defaults() {
    unsafe {
        clear_server_env();
        std::env::set_var("CARALYTIX_API_HOST", "https://api.example.test/");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_host, "https://api.example.test");
    assert_eq!(
        cfg.timeouts,
        ApiTimeouts { request_secs: DEFAULT_API_TIMEOUT_SECS, connect_secs: DEFAULT_API_CONNECT_TIMEOUT_SECS }
    );

    unsafe { clear_server_env() };
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("CARALYTIX_API_HOST", "http://127.0.0.1:8000");
        std::env::set_var("CARALYTIX_API_TIMEOUT_SECS", "5");
        std::env::set_var("CARALYTIX_API_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_host, "http://127.0.0.1:8000");
    assert_eq!(cfg.timeouts, ApiTimeouts { request_secs: 5, connect_secs: 2 });

    unsafe { clear_server_env() };
}

#[test]
fn from_env_requires_api_host() {
    unsafe { clear_server_env() };
    assert_eq!(ServerConfig::from_env(), Err(ConfigError::Missing { var: "CARALYTIX_API_HOST" }));
}

// =============================================================================
// parsers
// =============================================================================

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
    assert!(matches!(parse_port(Some("http")), Err(ConfigError::Invalid { var: "PORT", .. })));
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::Invalid { var: "PORT", .. })));
}

#[test]
fn parse_api_host_requires_http_scheme() {
    assert!(matches!(
        parse_api_host(Some("ftp://api.example.test")),
        Err(ConfigError::Invalid { var: "CARALYTIX_API_HOST", .. })
    ));
    assert!(matches!(
        parse_api_host(Some("api.example.test")),
        Err(ConfigError::Invalid { var: "CARALYTIX_API_HOST", .. })
    ));
    assert!(matches!(parse_api_host(Some("https://")), Err(ConfigError::Invalid { .. })));
    assert_eq!(parse_api_host(Some("  ")), Err(ConfigError::Missing { var: "CARALYTIX_API_HOST" }));
}

#[test]
fn parse_api_host_trims_trailing_slashes() {
    assert_eq!(parse_api_host(Some("https://api.example.test//")).unwrap(), "https://api.example.test");
}

#[test]
fn env_parse_missing_returns_default() {
    let val: u64 = env_parse("__CARALYTIX_TEST_NONEXISTENT_KEY__", 42);
    assert_eq!(val, 42);
}
