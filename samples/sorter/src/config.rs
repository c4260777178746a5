//! Sorter configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `SORTER_NUMBERS`: comma-separated integers to sort
//!   (optional, default: `123,24,63,25,98,23,35,46,565`)
//! - `SORTER_WORDS`: comma-separated words to sort
//!   (optional, default: the twelve month names)
//! - `SORTER_REMOVE`: comma-separated integers removed after sorting
//!   (optional, default: none)

use std::env;

const DEFAULT_NUMBERS: [i64; 9] = [123, 24, 63, 25, 98, 23, 35, 46, 565];

const DEFAULT_WORDS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Inputs of one sorter run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SorterConfig {
    /// Integers fed into the numeric tree.
    pub numbers: Vec<i64>,
    /// Words fed into the string tree.
    pub words: Vec<String>,
    /// Integers removed from the numeric tree after the first sort.
    pub remove: Vec<i64>,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            numbers: DEFAULT_NUMBERS.to_vec(),
            words: DEFAULT_WORDS.iter().map(ToString::to_string).collect(),
            remove: Vec::new(),
        }
    }
}

impl SorterConfig {
    /// Loads configuration from the process environment, honouring a `.env`
    /// file if one is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric list does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric list does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let numbers = lookup("SORTER_NUMBERS")
            .map(|value| parse_numbers("SORTER_NUMBERS", &value))
            .transpose()?
            .unwrap_or(defaults.numbers);
        let words = lookup("SORTER_WORDS")
            .map(|value| split_list(&value).map(ToString::to_string).collect())
            .unwrap_or(defaults.words);
        let remove = lookup("SORTER_REMOVE")
            .map(|value| parse_numbers("SORTER_REMOVE", &value))
            .transpose()?
            .unwrap_or(defaults.remove);

        Ok(Self {
            numbers,
            words,
            remove,
        })
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

fn parse_numbers(key: &str, value: &str) -> Result<Vec<i64>, ConfigError> {
    split_list(value)
        .map(|item| {
            item.parse().map_err(|error: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("{item:?}: {error}"),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let variables: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| variables.get(key).cloned()
    }

    #[rstest]
    fn sorter_config_defaults_when_unset() {
        let config = SorterConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SorterConfig::default());
        assert_eq!(config.words.len(), 12);
    }

    #[rstest]
    fn sorter_config_reads_lists() {
        let config = SorterConfig::from_lookup(lookup_from(&[
            ("SORTER_NUMBERS", "3, 1 ,2,"),
            ("SORTER_WORDS", "pear,apple"),
            ("SORTER_REMOVE", "1"),
        ]))
        .unwrap();

        assert_eq!(config.numbers, vec![3, 1, 2]);
        assert_eq!(config.words, vec!["pear", "apple"]);
        assert_eq!(config.remove, vec![1]);
    }

    #[rstest]
    #[case("SORTER_NUMBERS")]
    #[case("SORTER_REMOVE")]
    fn sorter_config_rejects_non_numbers(#[case] key: &str) {
        let error = SorterConfig::from_lookup(lookup_from(&[(key, "1,two")])).unwrap_err();
        assert_eq!(
            error,
            ConfigError::InvalidValue {
                key: key.to_string(),
                message: "\"two\": invalid digit found in string".to_string(),
            }
        );
    }

    #[rstest]
    fn config_error_display() {
        let error = ConfigError::InvalidValue {
            key: "SORTER_NUMBERS".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(format!("{error}"), "Invalid value for SORTER_NUMBERS: bad");
    }
}
