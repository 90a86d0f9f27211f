use thiserror::Error;

/// Resume uploads larger than this are rejected (5MB).
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub data_dir: String,
    /// Maximum resume upload size in bytes
    pub max_upload_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            data_dir: "./data".to_string(),
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let bind_address = lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address);
        let data_dir = lookup("DATA_DIR").unwrap_or(defaults.data_dir);

        let max_upload_size = match lookup("MAX_UPLOAD_SIZE") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "MAX_UPLOAD_SIZE must be a byte count, got '{raw}'"
                ))
            })?,
            None => defaults.max_upload_size,
        };

        let config = Config {
            bind_address,
            data_dir,
            max_upload_size,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "BIND_ADDRESS cannot be empty".to_string(),
            ));
        }

        if self.data_dir.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "DATA_DIR cannot be empty".to_string(),
            ));
        }

        if self.max_upload_size == 0 {
            return Err(ConfigError::ValidationError(
                "MAX_UPLOAD_SIZE must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert_eq!(config.data_dir, "./data");
        assert_eq!(config.max_upload_size, 5 * 1024 * 1024);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("BIND_ADDRESS", "127.0.0.1:9000"),
            ("DATA_DIR", "/var/lib/intake"),
            ("MAX_UPLOAD_SIZE", "1024"),
        ])
        .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.data_dir, "/var/lib/intake");
        assert_eq!(config.max_upload_size, 1024);
    }

    #[test]
    fn test_rejects_bad_upload_size() {
        assert!(load(&[("MAX_UPLOAD_SIZE", "0")]).is_err());
        assert!(load(&[("MAX_UPLOAD_SIZE", "lots")]).is_err());
    }

    #[test]
    fn test_rejects_empty_bind_address() {
        assert!(load(&[("BIND_ADDRESS", " ")]).is_err());
    }
}
