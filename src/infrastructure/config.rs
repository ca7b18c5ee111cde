use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

pub const HOST_VAR: &str = "MYDUMBBELL_HOST";
pub const PORT_VAR: &str = "MYDUMBBELL_PORT";
pub const DATA_DIR_VAR: &str = "MYDUMBBELL_DATA_DIR";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` when one exists.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset or blank
    /// variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{PORT_VAR} must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        Ok(Self {
            host: get(HOST_VAR).unwrap_or(defaults.host),
            port,
            data_dir: get(DATA_DIR_VAR).map(PathBuf::from).unwrap_or(defaults.data_dir),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "9090"),
            (DATA_DIR_VAR, "/tmp/gym"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/gym"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(err.to_string().contains(PORT_VAR));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = AppConfig::from_lookup(lookup(&[(HOST_VAR, "  ")])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
    }
}
