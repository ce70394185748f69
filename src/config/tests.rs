use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use tempfile::TempDir;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_keyscore_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var(Config::ENV_PORT);
        env::remove_var(Config::ENV_BIND_ADDR);
        env::remove_var(Config::ENV_MODEL_PATH);
        env::remove_var(Config::ENV_STUB_CLASSIFIER);
        env::remove_var(Config::ENV_STUB_LOGIT);
        env::remove_var(Config::ENV_PROMPT_TERM_LIMIT);
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8000);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert!(config.model_path.is_none());
    assert!(!config.stub_classifier);
    assert_eq!(config.stub_logit, 0.0);
    assert!(config.prompt_term_limit.is_none());
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:8000");

    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
fn test_socket_addr_ipv6_is_bracketed() {
    let config = Config {
        bind_addr: "::1".parse().unwrap(),
        ..Default::default()
    };

    assert_eq!(config.socket_addr(), "[::1]:8000");
    assert!(config.socket_addr().parse::<std::net::SocketAddr>().is_ok());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_keyscore_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8000);
    assert!(config.model_path.is_none());
    assert!(!config.stub_classifier);
}

#[test]
#[serial]
fn test_from_env_custom_port() {
    clear_keyscore_env();

    with_env_vars(&[("KEYSCORE_PORT", "3000")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.port, 3000);
    });
}

#[test]
#[serial]
fn test_from_env_port_zero_rejected() {
    clear_keyscore_env();

    with_env_vars(&[("KEYSCORE_PORT", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_port_not_a_number() {
    clear_keyscore_env();

    with_env_vars(&[("KEYSCORE_PORT", "eighty")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::PortParseError { .. }));
        assert!(err.to_string().contains("eighty"));
    });
}

#[test]
#[serial]
fn test_from_env_port_out_of_range() {
    clear_keyscore_env();

    with_env_vars(&[("KEYSCORE_PORT", "70000")], || {
        assert!(matches!(
            Config::from_env().unwrap_err(),
            ConfigError::PortParseError { .. }
        ));
    });
}

#[test]
#[serial]
fn test_from_env_ipv6_bind_addr() {
    clear_keyscore_env();

    with_env_vars(&[("KEYSCORE_BIND_ADDR", "::1")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(
            config.bind_addr,
            IpAddr::V6(std::net::Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))
        );
    });
}

#[test]
#[serial]
fn test_from_env_invalid_bind_addr() {
    clear_keyscore_env();

    with_env_vars(&[("KEYSCORE_BIND_ADDR", "not-an-ip")], || {
        assert!(matches!(
            Config::from_env().unwrap_err(),
            ConfigError::InvalidBindAddr { .. }
        ));
    });
}

#[test]
#[serial]
fn test_from_env_model_path_trimmed() {
    clear_keyscore_env();

    with_env_vars(&[("KEYSCORE_MODEL_PATH", "  /models/roberta  ")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.model_path, Some(PathBuf::from("/models/roberta")));
    });
}

#[test]
#[serial]
fn test_from_env_blank_model_path_is_none() {
    clear_keyscore_env();

    with_env_vars(&[("KEYSCORE_MODEL_PATH", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.model_path.is_none());
    });
}

#[test]
#[serial]
fn test_from_env_stub_flag_values() {
    for (value, expected) in [
        ("1", true),
        ("true", true),
        ("yes", true),
        ("0", false),
        ("FALSE", false),
        ("", false),
    ] {
        clear_keyscore_env();

        with_env_vars(&[("KEYSCORE_STUB_CLASSIFIER", value)], || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.stub_classifier, expected, "value {value:?}");
        });
    }
}

#[test]
#[serial]
fn test_from_env_stub_logit_and_term_limit() {
    clear_keyscore_env();

    with_env_vars(
        &[
            ("KEYSCORE_STUB_LOGIT", "-1.25"),
            ("KEYSCORE_PROMPT_TERM_LIMIT", "12"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.stub_logit, -1.25);
            assert_eq!(config.prompt_term_limit, Some(12));
            assert_eq!(config.prompt_builder().term_limit(), Some(12));
        },
    );
}

#[test]
#[serial]
fn test_from_env_invalid_term_limit() {
    clear_keyscore_env();

    with_env_vars(&[("KEYSCORE_PROMPT_TERM_LIMIT", "-3")], || {
        match Config::from_env().unwrap_err() {
            ConfigError::InvalidValue { name, value } => {
                assert_eq!(name, "KEYSCORE_PROMPT_TERM_LIMIT");
                assert_eq!(value, "-3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    });
}

#[test]
fn test_validate_requires_model_without_stub() {
    let err = Config::default().validate().unwrap_err();

    assert!(matches!(
        err,
        ConfigError::MissingEnvVar {
            name: "KEYSCORE_MODEL_PATH"
        }
    ));
}

#[test]
fn test_validate_stub_mode_without_model() {
    let config = Config {
        stub_classifier: true,
        ..Default::default()
    };

    assert!(config.validate().is_ok());
    assert!(config.classifier_config().is_none());
}

#[test]
fn test_validate_missing_model_dir() {
    let config = Config {
        model_path: Some(PathBuf::from("/nonexistent/keyscore/model")),
        ..Default::default()
    };

    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::PathNotFound { .. }
    ));
}

#[test]
fn test_validate_model_path_is_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("model.safetensors");
    std::fs::write(&file, b"x").unwrap();

    let config = Config {
        model_path: Some(file),
        ..Default::default()
    };

    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::NotADirectory { .. }
    ));
}

#[test]
fn test_validate_existing_model_dir() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        model_path: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
    let classifier = config.classifier_config().unwrap();
    assert_eq!(classifier.model_path.as_deref(), Some(dir.path()));
}

#[test]
fn test_validate_rejects_non_finite_stub_logit() {
    let config = Config {
        stub_classifier: true,
        stub_logit: f32::NAN,
        ..Default::default()
    };

    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidValue { .. }
    ));
}

#[test]
fn test_prompt_builder_default_is_unlimited() {
    assert_eq!(Config::default().prompt_builder().term_limit(), None);
}

#[test]
fn test_error_display() {
    let err = ConfigError::MissingEnvVar {
        name: "KEYSCORE_MODEL_PATH",
    };
    assert_eq!(
        err.to_string(),
        "missing required environment variable: KEYSCORE_MODEL_PATH"
    );

    let err = ConfigError::InvalidPort {
        value: "0".to_string(),
    };
    assert!(err.to_string().contains("between 1 and 65535"));
}
