// Standard library
use std::time::Duration;

// 3rd party crates
use config::{Config, Environment};

// Current module imports
use super::constants::{
    default_dns_timeout, default_http_timeout, default_log_level, ENV_PREFIX, ENV_SEPARATOR,
    LOG_LEVELS,
};
use super::errors::SettingsError;
use super::types::{Dns, Http, Log, Settings};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Http {
    fn default() -> Self {
        Self {
            timeout: default_http_timeout(),
        }
    }
}

impl Default for Dns {
    fn default() -> Self {
        Self {
            timeout: default_dns_timeout(),
        }
    }
}

impl Settings {
    /// Loads settings from `PUBIP__*` environment variables.
    pub fn load() -> Result<Self, SettingsError> {
        let config: Config = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Deserializes and validates an already assembled configuration.
    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        // Validate log level
        if !LOG_LEVELS.contains(&self.get_log_level().as_str()) {
            return Err(SettingsError::InvalidLogLevel(self.log.level.clone()));
        }

        // Validate timeouts
        if self.http.timeout == 0 {
            return Err(SettingsError::InvalidTimeout("HTTP"));
        }
        if self.dns.timeout == 0 {
            return Err(SettingsError::InvalidTimeout("DNS"));
        }

        Ok(())
    }

    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout)
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_config() {
        let settings = Settings::from_config(Config::builder().build().unwrap()).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.get_log_level(), "warn");
        assert_eq!(settings.http_timeout(), Duration::from_secs(5));
        assert_eq!(settings.dns_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let config = Config::builder()
            .set_override("log.level", "DEBUG")
            .unwrap()
            .set_override("dns.timeout", 2)
            .unwrap()
            .build()
            .unwrap();
        let settings = Settings::from_config(config).unwrap();

        assert_eq!(settings.get_log_level(), "debug");
        assert_eq!(settings.dns_timeout(), Duration::from_secs(2));
        assert_eq!(settings.http_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = Config::builder()
            .set_override("log.level", "chatty")
            .unwrap()
            .build()
            .unwrap();

        assert!(matches!(
            Settings::from_config(config),
            Err(SettingsError::InvalidLogLevel(level)) if level == "chatty"
        ));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = Config::builder()
            .set_override("http.timeout", 0)
            .unwrap()
            .build()
            .unwrap();

        assert!(matches!(
            Settings::from_config(config),
            Err(SettingsError::InvalidTimeout("HTTP"))
        ));
    }
}
