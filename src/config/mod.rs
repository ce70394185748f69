//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `KEYSCORE_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::classifier::ClassifierConfig;
use crate::constants::DEFAULT_PORT;
use crate::prompt::PromptBuilder;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `KEYSCORE_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Classifier model directory (`config.json`, `model.safetensors`, `tokenizer.json`).
    pub model_path: Option<PathBuf>,

    /// Serve with a fixed-logit classifier when no model is configured. Default: `false`.
    pub stub_classifier: bool,

    /// Logit returned by the stub classifier. Default: `0.0` (base score 5.0).
    pub stub_logit: f32,

    /// Max entries listed per lexicon in the classifier prompt. Default: unlimited.
    pub prompt_term_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            stub_classifier: false,
            stub_logit: 0.0,
            prompt_term_limit: None,
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "KEYSCORE_PORT";
    pub const ENV_BIND_ADDR: &'static str = "KEYSCORE_BIND_ADDR";
    pub const ENV_MODEL_PATH: &'static str = "KEYSCORE_MODEL_PATH";
    pub const ENV_STUB_CLASSIFIER: &'static str = "KEYSCORE_STUB_CLASSIFIER";
    pub const ENV_STUB_LOGIT: &'static str = "KEYSCORE_STUB_LOGIT";
    pub const ENV_PROMPT_TERM_LIMIT: &'static str = "KEYSCORE_PROMPT_TERM_LIMIT";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let stub_classifier = Self::parse_flag_from_env(Self::ENV_STUB_CLASSIFIER);
        let stub_logit = Self::parse_from_env(Self::ENV_STUB_LOGIT)?.unwrap_or(defaults.stub_logit);
        let prompt_term_limit = Self::parse_from_env(Self::ENV_PROMPT_TERM_LIMIT)?;

        Ok(Self {
            port,
            bind_addr,
            model_path,
            stub_classifier,
            stub_logit,
            prompt_term_limit,
        })
    }

    /// Validates paths and basic invariants.
    ///
    /// A model directory is required unless stub mode was requested explicitly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.model_path {
            Some(ref path) => {
                if !path.exists() {
                    return Err(ConfigError::PathNotFound { path: path.clone() });
                }
                if !path.is_dir() {
                    return Err(ConfigError::NotADirectory { path: path.clone() });
                }
            }
            None if !self.stub_classifier => {
                return Err(ConfigError::MissingEnvVar {
                    name: Self::ENV_MODEL_PATH,
                });
            }
            None => {}
        }

        if !self.stub_logit.is_finite() {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_STUB_LOGIT,
                value: self.stub_logit.to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        std::net::SocketAddr::new(self.bind_addr, self.port).to_string()
    }

    /// Classifier settings, or `None` when no model directory is configured.
    pub fn classifier_config(&self) -> Option<ClassifierConfig> {
        self.model_path.clone().map(ClassifierConfig::new)
    }

    pub fn prompt_builder(&self) -> PromptBuilder {
        match self.prompt_term_limit {
            Some(limit) => PromptBuilder::new().with_term_limit(limit),
            None => PromptBuilder::new(),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_flag_from_env(var_name: &str) -> bool {
        env::var(var_name).is_ok_and(|v| {
            let v = v.trim();
            !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false")
        })
    }

    fn parse_from_env<T: std::str::FromStr>(
        var_name: &'static str,
    ) -> Result<Option<T>, ConfigError> {
        match env::var(var_name) {
            Ok(value) if !value.trim().is_empty() => value
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    name: var_name,
                    value,
                }),
            _ => Ok(None),
        }
    }
}
