use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::{WeightVector, DEFAULT_TOP_N};

/// Default location of the shelter data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/pet_adoption_data.csv";

/// Optional settings file. Every field falls back to a built-in default.
///
/// Example YAML:
/// ```yaml
/// data_file: /srv/shelter/pet_adoption_data.csv
/// top_n: 5
/// weights:
///   size: 0.25
///   energy: 0.25
///   social: 0.20
///   noise: 0.15
///   age: 0.15
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// How many matches to show
    #[serde(default)]
    pub top_n: Option<usize>,

    #[serde(default)]
    pub weights: Option<WeightVector>,
}

impl Config {
    /// Config with every default spelled out, as written by `init`
    pub fn with_defaults() -> Self {
        Self {
            data_file: Some(PathBuf::from(DEFAULT_DATA_FILE)),
            top_n: Some(DEFAULT_TOP_N),
            weights: Some(WeightVector::default()),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    pub fn top_n(&self) -> usize {
        self.top_n.unwrap_or(DEFAULT_TOP_N)
    }

    pub fn weights(&self) -> WeightVector {
        self.weights.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.data_file(), PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.top_n(), 3);
        assert_eq!(config.weights(), WeightVector::default());
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
top_n: 5
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.top_n(), 5);
        assert!(config.data_file.is_none());
        assert!(config.weights.is_none());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
data_file: /tmp/pets.csv
top_n: 10
weights:
  size: 0.2
  energy: 0.2
  social: 0.2
  noise: 0.2
  age: 0.2
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.data_file(), PathBuf::from("/tmp/pets.csv"));
        assert_eq!(config.top_n(), 10);
        assert_eq!(config.weights().age, 0.2);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "queries: []";
        let result: Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::with_defaults();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
