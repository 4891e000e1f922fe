use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the console backend proxy.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8088".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("emm-console/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with EMM__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("EMM").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if !self.backend.base_url.starts_with("http://")
            && !self.backend.base_url.starts_with("https://")
        {
            return Err(config::ConfigError::Message(format!(
                "backend.base_url must be an http(s) URL, got '{}'",
                self.backend.base_url
            )));
        }
        if self.backend.request_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "backend.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration for testing with custom overrides, without touching
    /// the filesystem.
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [backend]
            base_url = "http://localhost:8088"
            request_timeout_secs = 30

            [logging]
            level = "info"
            format = "json"
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }
        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_load_with_defaults() {
        let config = Config::load_for_test(&[]).expect("Failed to load config");
        assert_eq!(config.backend.base_url, "http://localhost:8088");
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_config_overrides_applied() {
        let config = Config::load_for_test(&[
            ("backend.base_url", "https://console.example.com"),
            ("logging.level", "debug"),
        ])
        .expect("Failed to load config");
        assert_eq!(config.backend.base_url, "https://console.example.com");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_rejects_non_http_base_url() {
        let result = Config::load_for_test(&[("backend.base_url", "ftp://example.com")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_zero_timeout() {
        let result = Config::load_for_test(&[("backend.request_timeout_secs", "0")]);
        assert!(result.is_err());
    }
}
