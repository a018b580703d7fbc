use crate::calendar::parse_date_key;
use crate::errors::ConfigError;
use crate::ticker::DEFAULT_TICK;
use chrono::NaiveDate;
use std::{env, path::PathBuf, time::Duration};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/state.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub tick: Duration,
    pub fixed_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            tick: DEFAULT_TICK,
            fixed_date: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup("PORT") {
            config.port = value.trim().parse().map_err(|_| invalid("PORT", &value))?;
        }

        if let Some(value) = lookup("APP_DATA_PATH").filter(|value| !value.is_empty()) {
            config.data_path = PathBuf::from(value);
        }

        if let Some(value) = lookup("APP_TICK_SECS") {
            let secs: u64 = value
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| invalid("APP_TICK_SECS", &value))?;
            config.tick = Duration::from_secs(secs);
        }

        if let Some(value) = lookup("APP_TODAY").filter(|value| !value.is_empty()) {
            let date = parse_date_key(value.trim()).ok_or_else(|| invalid("APP_TODAY", &value))?;
            config.fixed_date = Some(date);
        }

        Ok(config)
    }
}

fn invalid(name: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("data/state.json"));
        assert_eq!(config.tick, Duration::from_secs(60));
        assert!(config.fixed_date.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("APP_DATA_PATH", "/tmp/checklist.json"),
            ("APP_TICK_SECS", "5"),
            ("APP_TODAY", "2024-03-03"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.data_path, PathBuf::from("/tmp/checklist.json"));
        assert_eq!(config.tick, Duration::from_secs(5));
        assert_eq!(config.fixed_date, parse_date_key("2024-03-03"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config_from(&[("PORT", "http")]).is_err());
        assert!(config_from(&[("APP_TICK_SECS", "0")]).is_err());
        assert!(config_from(&[("APP_TODAY", "03/03/2024")]).is_err());

        let err = config_from(&[("APP_TODAY", "2024-13-01")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid APP_TODAY: \"2024-13-01\"");
    }
}
