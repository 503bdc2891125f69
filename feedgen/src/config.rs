use std::env;

use crate::app::DEFAULT_FETCH_CONCURRENCY;

#[derive(Debug, Clone)]
pub struct Config {
    /// Cap on concurrent per-follower post fetches
    pub fetch_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            fetch_concurrency: env::var("FEED_FETCH_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FETCH_CONCURRENCY)
                .max(1),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }
}
