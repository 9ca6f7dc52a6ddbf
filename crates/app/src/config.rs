//! Application configuration loaded from environment variables.

use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "data/restaurant.json";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RESTAURANT_DATA_FILE`: JSON snapshot path (default: `"data/restaurant.json"`)
/// - `RESTAURANT_SAMPLE_DATA`: seed sample records when the file is missing (default: `true`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub sample_data: bool,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_file: lookup("RESTAURANT_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            sample_data: lookup("RESTAURANT_SAMPLE_DATA")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.sample_data),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            sample_data: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("data/restaurant.json"));
        assert!(config.sample_data);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("RESTAURANT_DATA_FILE", "/tmp/records.json"),
            ("RESTAURANT_SAMPLE_DATA", "off"),
            ("RUST_LOG", "debug"),
        ]));
        assert_eq!(config.data_file, PathBuf::from("/tmp/records.json"));
        assert!(!config.sample_data);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unparsable_flag_falls_back() {
        let config = Config::from_lookup(lookup(&[("RESTAURANT_SAMPLE_DATA", "maybe")]));
        assert!(config.sample_data);
    }
}
