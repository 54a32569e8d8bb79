// src/config.rs
use std::env;
use thiserror::Error;

const DEFAULT_MAX_PAGE_SIZE: u32 = 100;
const DEFAULT_EVENT_CAPACITY: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    max_page_size: u32,
    event_capacity: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_page_size = parse_positive(&lookup, "ARTICLES_MAX_PAGE_SIZE")?
            .unwrap_or(DEFAULT_MAX_PAGE_SIZE);
        let event_capacity = parse_positive(&lookup, "ARTICLE_EVENT_CAPACITY")?
            .unwrap_or(DEFAULT_EVENT_CAPACITY);

        Ok(Self {
            max_page_size,
            event_capacity,
        })
    }

    /// Largest `size` accepted by article listings.
    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }

    /// Buffer length of the broadcast event channel.
    pub fn event_capacity(&self) -> usize {
        self.event_capacity
    }
}

fn parse_positive<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(Some(value)),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}
