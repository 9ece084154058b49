use std::{env, fs, path::Path, time::Duration};

use regex::{Captures, Regex};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::ApiSdkError;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Can not read config file {0}: {1}")]
    CanNotReadFile(String, String),

    #[error("Config is invalid yaml and does not match the struct - {0}")]
    InvalidYaml(String),

    #[error("Environment variable {0} not found")]
    EnvironmentVariableNotFound(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl From<ConfigError> for ApiSdkError {
    fn from(value: ConfigError) -> Self {
        ApiSdkError::ConfigError(value.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_retry_delay_ms: u64,
    pub max_retry_delay_ms: u64,
    pub retry_multiplier: f32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_retry_delay_ms: 500,
            max_retry_delay_ms: 10_000,
            retry_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    pub fn disabled() -> Self {
        Self { max_retries: 0, ..Default::default() }
    }

    /// Exponential backoff delay before retry number `attempt` (0-based).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay =
            (self.initial_retry_delay_ms as f32) * self.retry_multiplier.powi(attempt as i32);

        Duration::from_millis((delay as u64).min(self.max_retry_delay_ms))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitBreakerConfig {
    pub enabled: bool,
    pub failure_threshold: u32,
    pub open_duration_seconds: u64,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self { enabled: true, failure_threshold: 5, open_duration_seconds: 30 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: false, ttl_seconds: 300 }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct AuthentikConfig {
    pub base_url: String,
    pub api_token: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub circuit_breaker: CircuitBreakerConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub log_request_bodies: bool,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    format!("authentik-client/{}", env!("CARGO_PKG_VERSION"))
}

impl std::fmt::Debug for AuthentikConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthentikConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"***")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("retry", &self.retry)
            .field("circuit_breaker", &self.circuit_breaker)
            .field("cache", &self.cache)
            .field("log_request_bodies", &self.log_request_bodies)
            .finish()
    }
}

impl AuthentikConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: default_user_agent(),
            retry: RetryConfig::default(),
            circuit_breaker: CircuitBreakerConfig::default(),
            cache: CacheConfig::default(),
            log_request_bodies: false,
        }
    }

    /// Reads a YAML config file, replacing `${VAR}` placeholders from the
    /// environment first.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::CanNotReadFile(path.display().to_string(), e.to_string()))?;

        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let substituted = substitute_env_variables(contents)?;
        let config: AuthentikConfig = serde_yaml::from_str(&substituted)
            .map_err(|e| ConfigError::InvalidYaml(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Builds the config from `AUTHENTIK_*` environment variables, loading a
    /// `.env` file from the working directory when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = required_env("AUTHENTIK_BASE_URL")?;
        let api_token = required_env("AUTHENTIK_API_TOKEN")?;
        let mut config = Self::new(base_url, api_token);

        if let Ok(timeout) = env::var("AUTHENTIK_TIMEOUT_SECONDS") {
            config.timeout_seconds = timeout.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "AUTHENTIK_TIMEOUT_SECONDS must be a number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url is required".into()));
        }

        let url = Url::parse(self.base_url.trim())
            .map_err(|e| ConfigError::Invalid(format!("base_url is not a valid url: {}", e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Invalid(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.api_token.trim().is_empty() {
            return Err(ConfigError::Invalid("api_token is required".into()));
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::Invalid("timeout_seconds must be greater than 0".into()));
        }

        if !self.retry.retry_multiplier.is_finite() || self.retry.retry_multiplier < 1.0 {
            return Err(ConfigError::Invalid(
                "retry.retry_multiplier must be a finite number of at least 1".into(),
            ));
        }

        if self.circuit_breaker.enabled && self.circuit_breaker.failure_threshold == 0 {
            return Err(ConfigError::Invalid(
                "circuit_breaker.failure_threshold must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// `<base_url>/api/v3/`, the root every endpoint path is joined onto.
    pub fn api_root(&self) -> String {
        format!("{}/api/v3/", self.base_url.trim().trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::EnvironmentVariableNotFound(name.to_string()))
}

fn substitute_env_variables(contents: &str) -> Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::Invalid(e.to_string()))?;

    let mut missing = None;
    let result = re.replace_all(contents, |caps: &Captures| {
        let var_name = &caps[1];
        match env::var(var_name) {
            Ok(val) => val,
            Err(_) => {
                missing.get_or_insert_with(|| var_name.to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(var_name) => Err(ConfigError::EnvironmentVariableNotFound(var_name)),
        None => Ok(result.into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AuthentikConfig::new("https://auth.example.com", "token");

        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.circuit_breaker.enabled);
        assert!(!config.cache.enabled);
    }

    #[test]
    fn test_api_root_normalizes_trailing_slashes() {
        let config = AuthentikConfig::new("https://auth.example.com///", "token");
        assert_eq!(config.api_root(), "https://auth.example.com/api/v3/");

        let config = AuthentikConfig::new("http://localhost:9000/authentik", "token");
        assert_eq!(config.api_root(), "http://localhost:9000/authentik/api/v3/");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(AuthentikConfig::new("", "token").validate().is_err());
        assert!(AuthentikConfig::new("not a url", "token").validate().is_err());
        assert!(AuthentikConfig::new("ftp://auth.example.com", "token").validate().is_err());
        assert!(AuthentikConfig::new("https://auth.example.com", "  ").validate().is_err());

        let mut config = AuthentikConfig::new("https://auth.example.com", "token");
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = AuthentikConfig::new("https://auth.example.com", "token");
        config.retry.retry_multiplier = 0.5;
        assert!(config.validate().is_err());
        config.retry.retry_multiplier = f32::NAN;
        assert!(config.validate().is_err());
        config.retry.retry_multiplier = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = AuthentikConfig::new("https://auth.example.com", "token");
        config.circuit_breaker.failure_threshold = 0;
        assert!(config.validate().is_err());
        config.circuit_breaker.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_masks_token() {
        let config = AuthentikConfig::new("https://auth.example.com", "super-secret");
        let out = format!("{:?}", config);

        assert!(!out.contains("super-secret"));
        assert!(out.contains("***"));
    }

    #[test]
    fn test_retry_delay_grows_and_is_capped() {
        let retry = RetryConfig {
            max_retries: 5,
            initial_retry_delay_ms: 100,
            max_retry_delay_ms: 1_000,
            retry_multiplier: 2.0,
        };

        assert_eq!(retry.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(retry.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(retry.delay_for_attempt(3), Duration::from_millis(800));
        assert_eq!(retry.delay_for_attempt(4), Duration::from_millis(1_000));
        assert_eq!(retry.delay_for_attempt(20), Duration::from_millis(1_000));
    }

    #[test]
    fn test_yaml_with_partial_sections_uses_defaults() {
        let config = AuthentikConfig::from_yaml_str(
            r#"
base_url: https://auth.example.com
api_token: abc
retry:
  max_retries: 1
cache:
  enabled: true
"#,
        )
        .unwrap();

        assert_eq!(config.retry.max_retries, 1);
        assert_eq!(config.retry.initial_retry_delay_ms, 500);
        assert!(config.cache.enabled);
        assert_eq!(config.cache.ttl_seconds, 300);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_yaml_file_substitutes_environment() {
        // unique name so parallel tests do not race on it
        unsafe { env::set_var("AUTHENTIK_CLIENT_TEST_TOKEN_7F3A", "from-env") };

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_url: https://auth.example.com\napi_token: ${{AUTHENTIK_CLIENT_TEST_TOKEN_7F3A}}"
        )
        .unwrap();

        let config = AuthentikConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.api_token, "from-env");
    }

    #[test]
    fn test_yaml_missing_environment_variable_is_an_error() {
        let result = AuthentikConfig::from_yaml_str(
            "base_url: https://auth.example.com\napi_token: ${AUTHENTIK_CLIENT_TEST_UNSET_91B2}",
        );

        match result {
            Err(ConfigError::EnvironmentVariableNotFound(name)) => {
                assert_eq!(name, "AUTHENTIK_CLIENT_TEST_UNSET_91B2");
            }
            other => panic!("expected missing variable error, got {other:?}"),
        }
    }

    #[test]
    fn test_yaml_nan_multiplier_is_rejected() {
        let result = AuthentikConfig::from_yaml_str(
            "base_url: https://auth.example.com\napi_token: abc\nretry:\n  retry_multiplier: .nan",
        );

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_env_reads_timeout() {
        // the only test touching AUTHENTIK_* variables
        unsafe {
            env::set_var("AUTHENTIK_BASE_URL", "https://auth.example.com");
            env::set_var("AUTHENTIK_API_TOKEN", "env-token");
            env::set_var("AUTHENTIK_TIMEOUT_SECONDS", "soon");
        }
        let invalid = AuthentikConfig::from_env();

        unsafe { env::set_var("AUTHENTIK_TIMEOUT_SECONDS", " 45 ") };
        let valid = AuthentikConfig::from_env();

        unsafe {
            env::remove_var("AUTHENTIK_BASE_URL");
            env::remove_var("AUTHENTIK_API_TOKEN");
            env::remove_var("AUTHENTIK_TIMEOUT_SECONDS");
        }

        match invalid {
            Err(ConfigError::Invalid(message)) => assert!(message.contains("soon")),
            other => panic!("expected invalid timeout error, got {other:?}"),
        }
        let valid = valid.unwrap();
        assert_eq!(valid.api_token, "env-token");
        assert_eq!(valid.timeout(), Duration::from_secs(45));
    }

    #[test]
    fn test_yaml_missing_required_field() {
        let result = AuthentikConfig::from_yaml_str("base_url: https://auth.example.com");
        assert!(matches!(result, Err(ConfigError::InvalidYaml(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = AuthentikConfig::from_yaml_file(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(result, Err(ConfigError::CanNotReadFile(_, _))));
    }
}
