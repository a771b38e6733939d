use std::env;
use std::time::Duration;

use dotenvy::dotenv;

use crate::error::{LoggerError, Result};

/// The secret shipped in example .env files; refuse to run with it.
pub const PLACEHOLDER_SECRET: &str = "YOUR_DATABASE_SECRET";

const DEFAULT_LOG_INTERVAL_SECS: u64 = 5;
const DEFAULT_ERROR_COOLDOWN_SECS: u64 = 10;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_HISTORY_POINTS: usize = 50; // keep in sync with the ESP32 display code

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_secret: String,
    pub log_interval: Duration,
    pub error_cooldown: Duration,
    pub http_timeout: Duration,
    pub max_history_points: usize,
}

impl Config {
    /// Read configuration from the environment (and .env, if present).
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| LoggerError::Config("DATABASE_URL must be set".into()))?
            .trim_end_matches('/')
            .to_owned();
        let database_secret = env::var("DATABASE_SECRET")
            .map_err(|_| LoggerError::Config("DATABASE_SECRET must be set".into()))?;

        let config = Self {
            database_url,
            database_secret,
            log_interval: Duration::from_secs(var_or(
                "LOG_INTERVAL_SECS",
                DEFAULT_LOG_INTERVAL_SECS,
            )?),
            error_cooldown: Duration::from_secs(DEFAULT_ERROR_COOLDOWN_SECS),
            http_timeout: Duration::from_secs(var_or(
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
            max_history_points: var_or("MAX_HISTORY_POINTS", DEFAULT_MAX_HISTORY_POINTS)?,
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.database_url.is_empty() {
            return Err(LoggerError::Config("DATABASE_URL is empty".into()));
        }
        if self.database_secret.is_empty() {
            return Err(LoggerError::Config("DATABASE_SECRET is empty".into()));
        }
        if self.database_secret == PLACEHOLDER_SECRET {
            return Err(LoggerError::Config(
                "DATABASE_SECRET is still the placeholder, paste your database secret".into(),
            ));
        }
        if self.max_history_points == 0 {
            return Err(LoggerError::Config("MAX_HISTORY_POINTS must be > 0".into()));
        }
        Ok(())
    }
}

fn var_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| LoggerError::Config(format!("{name} is not a valid number: {raw}"))),
        Err(_) => Ok(default),
    }
}
