//! Runtime configuration loaded from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::db::get_database_path;
use crate::error::AppResult;
use crate::integrations::random_org::{DEFAULT_RANDOM_ORG_URL, DEFAULT_TIMEOUT};

const DEFAULT_POOL_SIZE: u32 = 8;

/// Settings needed to wire the database and the random source.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub random_org_url: String,
    pub random_timeout: Duration,
    pub pool_size: u32,
}

impl AppConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MEAL_MAX_DB_PATH` - SQLite database file (default: platform data dir)
    /// - `RANDOM_ORG_URL` - Random number endpoint (default: random.org decimal fractions)
    /// - `RANDOM_TIMEOUT_SECS` - Random request timeout (default: 5, min 1)
    /// - `DB_POOL_SIZE` - Connection pool size (default: 8, min 1)
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match lookup("MEAL_MAX_DB_PATH") {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => get_database_path()?,
        };

        let random_org_url = lookup("RANDOM_ORG_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RANDOM_ORG_URL.to_string());

        let random_timeout = parse::<u64>(&lookup, "RANDOM_TIMEOUT_SECS")
            .map(|secs| Duration::from_secs(secs.max(1)))
            .unwrap_or(DEFAULT_TIMEOUT);

        let pool_size = parse::<u32>(&lookup, "DB_POOL_SIZE")
            .map(|size| size.max(1))
            .unwrap_or(DEFAULT_POOL_SIZE);

        Ok(Self {
            database_path,
            random_org_url,
            random_timeout,
            pool_size,
        })
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
